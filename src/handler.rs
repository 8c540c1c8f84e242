//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调图像文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::steganography::{capacity, decode, encode};
use anyhow::{Context, Result};
use colored::Colorize;

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责加载输入图像、调用编码核心函数将消息字节逐像素嵌入，
/// 最后将结果保存到目标图像文件。
///
/// 仅编译了无损容器格式的编解码器 (PNG, BMP, TIFF, WebP, QOI)，
/// 有损格式 (如 JPEG) 在加载或保存阶段即被拒绝。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和消息文本的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 图像的像素容量不足以容纳消息和终止哨兵。
/// * 无法编码或写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let image = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let mut pixels = image.into_rgb8();

    encode(&mut pixels, args.message.as_bytes()).with_context(|| {
        format!(
            "Unable to hide the message in '{}'. \nThe image provides {} pixels, one of which is reserved for the terminator.",
            args.image.to_string_lossy().red().bold(),
            capacity(&pixels).to_string().green().bold()
        )
    })?;

    pixels.save(&args.dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责加载经过隐写的图像文件、调用解码核心函数逐像素重建消息，
/// 最后将恢复的消息打印到控制台。
///
/// # Arguments
///
/// * `args` - 包含输入路径的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 扫描完全部像素仍未找到终止哨兵 (图像可能不包含隐藏消息)。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let image = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let pixels = image.into_rgb8();

    let message = decode(&pixels).with_context(|| {
        format!(
            "Failed to recover a message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    println!("Recovered message: {}", message.green().bold());

    Ok(())
}
