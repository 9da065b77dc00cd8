/// Stable codec IDs (u16) used in configuration and logs.
pub mod codec_ids {
    pub const PASSTHROUGH: u16 = 0x0000;
    pub const ZSTD: u16        = 0x0001;
    pub const LZ4: u16         = 0x0002;
    pub const ZLIB: u16        = 0x0003;
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_ZSTD: i32 = 1;
pub const DEFAULT_LEVEL_LZ4: i32 = 0; // block mode has no levels
pub const DEFAULT_LEVEL_ZLIB: i32 = 6;
