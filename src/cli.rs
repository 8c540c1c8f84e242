//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取短文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中嵌入或提取短文本消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (嵌入) 和 decode (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将一条文本消息嵌入无损格式图像 (如 PNG, BMP) 的像素中。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中提取隐藏的消息并打印到控制台。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要嵌入图像的消息文本。
    #[arg(short, long)]
    pub message: String,

    /// 嵌入完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub dest: PathBuf,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已嵌入消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
