//! # 编解码器顶层模块
//!
//! 对外暴露两项内存级操作：`encode` 把消息封入图像字节并返回
//! 无损 PNG 字节；`decode` 从图像字节中恢复消息。
//! 两者均为无状态的同步函数，不共享任何可变状态，
//! 可以安全地在不同图像上并发调用。

use crate::bits::{bits_to_text, text_to_bits};
use crate::embed::{embed, extract};
use crate::envelope::{open, seal};
use crate::error::CodecError;
use image::ImageFormat;
use log::debug;
use std::io::Cursor;

/// 把消息和密码封入载体图像的 LSB 中。
///
/// 载体可以是任何能解码为像素网格的格式；输出始终重新编码为
/// PNG，保证无损（任何有损再保存都会按设计破坏嵌入的数据）。
///
/// # Errors
///
/// * [`CodecError::UnreadableImage`] - 载体无法解码。
/// * [`CodecError::ReservedMarker`] - 消息或密码含保留标记。
/// * [`CodecError::CapacityExceeded`] - 载体容量不足。
/// * [`CodecError::ImageWrite`] - 结果无法编码为 PNG。
pub fn encode(image_bytes: &[u8], message: &str, password: &str) -> Result<Vec<u8>, CodecError> {
    let img = image::load_from_memory(image_bytes).map_err(CodecError::UnreadableImage)?;
    let mut pixels = img.into_rgb8();

    let envelope = seal(message, password)?;
    let payload_bits = text_to_bits(&envelope);

    debug!(
        "embedding {} payload bits into {} carrier bytes",
        payload_bits.len(),
        pixels.len()
    );

    embed(&mut pixels, &payload_bits)?;

    let mut out = Cursor::new(Vec::new());
    pixels
        .write_to(&mut out, ImageFormat::Png)
        .map_err(CodecError::ImageWrite)?;

    Ok(out.into_inner())
}

/// 从载体图像的 LSB 中恢复消息，校验密码。
///
/// # Errors
///
/// * [`CodecError::UnreadableImage`] - 载体无法解码。
/// * [`CodecError::InvalidOrCorrupted`] - 长度头为零或越界。
/// * [`CodecError::DelimiterNotFound`] / [`CodecError::MalformedStructure`]
///   / [`CodecError::TagsNotFound`] - 恢复出的文本不符合信封语法。
/// * [`CodecError::IncorrectPassword`] - 密码不一致。
pub fn decode(image_bytes: &[u8], password: &str) -> Result<String, CodecError> {
    let img = image::load_from_memory(image_bytes).map_err(CodecError::UnreadableImage)?;
    let pixels = img.into_rgb8();

    let payload_bits = extract(&pixels)?;

    debug!(
        "extracted {} payload bits from {} carrier bytes",
        payload_bits.len(),
        pixels.len()
    );

    let full_message = bits_to_text(&payload_bits);
    open(&full_message, password)
}
