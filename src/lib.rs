//! # lsb_seal 库
//!
//! 本库包含密码封印式 LSB 隐写编解码器的核心逻辑。
//! 编解码器完全在内存中工作：调用方提供图像字节，
//! 得到编码后的图像字节或解码出的消息文本。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod embed;
pub mod envelope;
pub mod error;
pub mod handler;
