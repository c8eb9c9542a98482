//! # 信封模块
//!
//! 负责信封文本的构造与解析。编码侧把密码和消息拼成
//! `<password>###DELIMITER###<MSG><message></MSG>###END###`；
//! 解码侧按同样的语法拆回密码与消息，并校验密码一致。

use crate::constants::{DELIMITER, END_MARK, MSG_CLOSE, MSG_OPEN};
use crate::error::CodecError;

/// 按线格式构造信封文本。
///
/// 消息或密码中若含有任一保留标记，信封语法在解码侧会产生歧义，
/// 因此直接以 [`CodecError::ReservedMarker`] 拒绝。
pub fn seal(message: &str, password: &str) -> Result<String, CodecError> {
    for marker in [DELIMITER, MSG_OPEN, MSG_CLOSE] {
        if message.contains(marker) || password.contains(marker) {
            return Err(CodecError::ReservedMarker { marker });
        }
    }

    Ok(format!(
        "{password}{DELIMITER}{MSG_OPEN}{message}{MSG_CLOSE}{END_MARK}"
    ))
}

/// 解析恢复出的信封文本，校验密码并取出消息。
///
/// 检查按固定顺序进行：分隔符存在、结构可拆分、密码一致、
/// 消息标记存在。任一步失败即终止，错误类型与失败原因一一对应。
/// `</MSG>` 之后的内容（通常是结尾标记）一律忽略。
pub fn open(full_message: &str, password: &str) -> Result<String, CodecError> {
    if !full_message.contains(DELIMITER) {
        return Err(CodecError::DelimiterNotFound);
    }

    let mut parts = full_message.splitn(2, DELIMITER);
    let stored_password = parts.next().ok_or(CodecError::MalformedStructure)?;
    let remaining = parts.next().ok_or(CodecError::MalformedStructure)?;

    if stored_password != password {
        return Err(CodecError::IncorrectPassword);
    }

    let start = remaining.find(MSG_OPEN).ok_or(CodecError::TagsNotFound)? + MSG_OPEN.len();
    let body = &remaining[start..];
    let end = body.find(MSG_CLOSE).ok_or(CodecError::TagsNotFound)?;

    Ok(body[..end].to_owned())
}
