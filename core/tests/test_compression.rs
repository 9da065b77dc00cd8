#[cfg(test)]
mod compression_tests {
    use serializer_core::compression::{
        codec_from_id, create_compressor, create_decompressor, resolve, CompressionCodec, CompressionError,
    };

    const ALL: [CompressionCodec; 4] = [
        CompressionCodec::Passthrough,
        CompressionCodec::Zstd,
        CompressionCodec::Lz4,
        CompressionCodec::Zlib,
    ];

    fn sample() -> Vec<u8> {
        br#"{"series":[{"metric":"system.load.1","points":[[1700000000,0.5]]}]}"#.repeat(64)
    }

    #[test]
    fn every_codec_restores_its_input() {
        let input = sample();
        for codec in ALL {
            let compressor = create_compressor(codec, None).expect("compressor");
            let decompressor = create_decompressor(codec);
            assert_eq!(compressor.codec(), codec);
            assert_eq!(decompressor.codec(), codec);

            let compressed = compressor.compress(&input).expect("compress");
            let restored = decompressor.decompress(&compressed).expect("decompress");
            assert_eq!(restored, input, "{} mangled its input", codec.name());
        }
    }

    #[test]
    fn repetitive_input_shrinks() {
        let input = sample();
        for codec in [CompressionCodec::Zstd, CompressionCodec::Lz4, CompressionCodec::Zlib] {
            let compressed = create_compressor(codec, None).unwrap().compress(&input).unwrap();
            assert!(compressed.len() < input.len() / 4, "{} did not shrink", codec.name());
        }
    }

    #[test]
    fn zlib_output_is_a_standard_zlib_stream() {
        use std::io::Read;

        let input = sample();
        let compressed = create_compressor(CompressionCodec::Zlib, None).unwrap().compress(&input).unwrap();
        // CMF byte of a deflate stream with a 32K window.
        assert_eq!(compressed[0], 0x78);

        let mut restored = Vec::new();
        flate2::read::ZlibDecoder::new(compressed.as_slice())
            .read_to_end(&mut restored)
            .unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn compress_into_appends() {
        let compressor = create_compressor(CompressionCodec::Passthrough, None).unwrap();
        let mut out = b"head".to_vec();
        compressor.compress_into(b"tail", &mut out).unwrap();
        assert_eq!(out, b"headtail");
    }

    #[test]
    fn empty_input_round_trips() {
        for codec in ALL {
            let compressed = create_compressor(codec, None).unwrap().compress(b"").unwrap();
            let restored = create_decompressor(codec).decompress(&compressed).unwrap();
            assert!(restored.is_empty());
        }
    }

    #[test]
    fn invalid_levels_are_rejected() {
        assert!(matches!(
            create_compressor(CompressionCodec::Zlib, Some(10)),
            Err(CompressionError::InvalidLevel { codec: "zlib", level: 10 })
        ));
        assert!(matches!(
            create_compressor(CompressionCodec::Zstd, Some(1000)),
            Err(CompressionError::InvalidLevel { codec: "zstd", .. })
        ));
        assert!(create_compressor(CompressionCodec::Zlib, Some(9)).is_ok());
        assert!(create_compressor(CompressionCodec::Zstd, Some(3)).is_ok());
    }

    #[test]
    fn corrupt_input_is_an_error() {
        let bogus = [0x00u8, 0x01, 0x02, 0x03];
        for codec in [CompressionCodec::Zstd, CompressionCodec::Zlib] {
            let err = create_decompressor(codec).decompress(&bogus).unwrap_err();
            assert!(matches!(err, CompressionError::CodecProcessFailed { .. }));
        }
    }

    #[test]
    fn codec_ids_resolve() {
        assert_eq!(codec_from_id(0x0003).unwrap(), CompressionCodec::Zlib);
        let err = codec_from_id(0x00ff).unwrap_err();
        assert_eq!(err.to_string(), "unsupported compression codec: 0xff");
        assert_eq!(resolve(CompressionCodec::Zlib).default_level, 6);
        assert!(!resolve(CompressionCodec::Lz4).supports_level);
    }

    #[test]
    fn unit_codecs_build_through_default() {
        use serializer_core::compression::codecs::{
            Lz4Compressor, Lz4Decompressor, ZlibDecompressor, ZstdDecompressor,
        };
        use serializer_core::compression::{Compressor, Decompressor};

        let input = sample();
        let packed = Lz4Compressor::default().compress(&input).unwrap();
        assert_eq!(Lz4Decompressor::default().decompress(&packed).unwrap(), input);

        let zlib = create_compressor(CompressionCodec::Zlib, None).unwrap().compress(&input).unwrap();
        assert_eq!(ZlibDecompressor::default().decompress(&zlib).unwrap(), input);

        let zstd = create_compressor(CompressionCodec::Zstd, None).unwrap().compress(&input).unwrap();
        assert_eq!(ZstdDecompressor::default().decompress(&zstd).unwrap(), input);
    }
}
