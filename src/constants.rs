/// 像素通道中保留不动的位：除最低有效位外的全部 7 位。
/// 嵌入时先用该掩码清除通道的最低有效位，再写入消息位，
/// 因此每个通道的数值变化被限制在 ±1 以内。
pub const CHANNEL_MASK: u8 = 0xFE;

/// 消息字节中写入 R 通道的位序号（最高有效位，bit 7）。
pub const R_BIT: u8 = 7;

/// 消息字节中写入 G 通道的位序号（bit 6）。
pub const G_BIT: u8 = 6;

/// 消息字节中写入 B 通道的位序号（bit 5）。
pub const B_BIT: u8 = 5;

/// 标记消息结束的哨兵字节。
/// 编码器在载荷之后额外写入一个像素来承载该值；
/// 解码器重建出该值时终止扫描。
pub const TERMINATOR: u8 = 0;
