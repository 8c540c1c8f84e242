//! # lsb_note 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑。
//!
//! 采用每像素一字节的编码方案：消息字节的高 3 位 (bit 7-5) 分别写入
//! R、G、B 通道的最低有效位，其余 5 位不被存储。因此往返恢复的文本
//! 是原始消息的高 3 位投影，仅低 5 位全为零的字节可被精确还原。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod handler;
pub mod steganography;
