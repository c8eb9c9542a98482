//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中封入或恢复带密码的文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中封入或恢复带密码的文本消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (封入) 和 decode (恢复)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中封入带密码的文本消息。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复隐藏的消息 (需要密码)。
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用作载体的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要封入的消息内容的文件路径。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 解码时需要提供的密码。
    #[arg(short, long)]
    pub password: String,

    /// 编码完成后，保存结果图像的输出路径。
    /// 省略时默认写到载体同目录下的 `sealed_<原文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已封入消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 编码时使用的密码。
    #[arg(short, long)]
    pub password: String,

    /// 恢复消息后，保存消息内容的输出路径。
    /// 省略时默认写到图像同目录下的 `recovered_<原文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
