//! # 编解码错误类型模块
//!
//! 定义编解码器所有终止性失败的类型化错误。
//! 每个失败都会立即中止调用并原样上抛给调用方，
//! 不存在重试或部分结果。

use thiserror::Error;

/// 编解码器的调用方可见错误。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// 载体图像无法解码为像素网格。
    #[error("Could not read the carrier image.")]
    UnreadableImage(#[source] image::ImageError),

    /// 消息加上信封框架超出了可用的 LSB 容量。
    #[error("Message too long! Image can hold {max_chars} characters max.")]
    CapacityExceeded {
        /// 该图像最多可容纳的字符数，即 `(总字节数 - 32) / 8`。
        max_chars: usize,
    },

    /// 解出的长度头为零或超过剩余缓冲区大小。
    #[error("Invalid encoded data or corrupted image.")]
    InvalidOrCorrupted,

    /// 恢复出的文本中不存在密码分隔符。
    #[error("Invalid encoded data - delimiter not found.")]
    DelimiterNotFound,

    /// 按分隔符拆分后得不到密码与剩余部分。
    #[error("Invalid message structure.")]
    MalformedStructure,

    /// 信封结构有效，但存储的密码与提供的密码不一致。
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// 剩余部分中缺少 `<MSG>` 或 `</MSG>` 标记。
    #[error("Message tags not found.")]
    TagsNotFound,

    /// 消息或密码本身含有保留标记，会破坏信封语法，予以拒绝。
    #[error("Message and password must not contain the reserved marker '{marker}'.")]
    ReservedMarker {
        /// 冲突的保留标记。
        marker: &'static str,
    },

    /// 编码结果无法重新编码为无损图像。
    #[error("Could not write the encoded image.")]
    ImageWrite(#[source] image::ImageError),
}
