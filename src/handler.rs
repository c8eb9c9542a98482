//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用内存级编解码器以及向用户报告结果。
//! 编解码器本身从不接触磁盘，所有文件访问都集中在这里。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::codec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 根据输入图像路径生成默认的输出图像路径：同目录下的 `sealed_<原文件名>.png`。
fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());

    image.with_file_name(format!("sealed_{stem}.png"))
}

/// 根据输入图像路径生成默认的消息输出路径：同目录下的 `recovered_<原文件名>.txt`。
fn default_text(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());

    image.with_file_name(format!("recovered_{stem}.txt"))
}

/// 覆盖保护：输出文件已存在且未指定 `--force` 时拒绝执行。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} (use --force to overwrite)",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 负责读取载体图像和消息文件、调用编解码器把消息封入图像，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和密码的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或消息文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 编解码器执行失败（载体不可读、容量不足、消息含保留标记等）。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    // 输出总是 PNG 编码；扩展名不是 .png 时提醒用户，但按原路径写入。
    if dest
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        eprintln!(
            "{} The output is always PNG-encoded; '{}' will contain PNG data despite its extension.",
            "Warning:".yellow().bold(),
            dest.to_string_lossy().yellow()
        );
    }

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read message file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let sealed = codec::encode(&picture, &message, &args.password).with_context(|| {
        format!(
            "Failed to seal the message into '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, sealed).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully sealed and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用编解码器校验密码并恢复消息，
/// 最后将消息内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和密码的 `DecodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 编解码器执行失败（图像未含有效数据、密码不一致等）。
/// * 无法写入到目标文本文件。
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let text_path = args.text.unwrap_or_else(|| default_text(&args.image));
    ensure_writable(&text_path, args.force)?;

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let message = codec::decode(&picture, &args.password).with_context(|| {
        format!(
            "Failed to recover a message from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&text_path, message).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );

    Ok(())
}
