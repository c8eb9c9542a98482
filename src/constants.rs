/// 信封中分隔密码与消息主体的保留标记。
pub const DELIMITER: &str = "###DELIMITER###";

/// 消息主体的起始标记。
pub const MSG_OPEN: &str = "<MSG>";

/// 消息主体的结束标记。
pub const MSG_CLOSE: &str = "</MSG>";

/// 信封的结尾标记。写入时附加，读取时不校验（保留它只是为了
/// 与既有线格式兼容，解码逻辑不得依赖它的存在）。
pub const END_MARK: &str = "###END###";

/// 用于隐写载荷位数的长度头位数。
/// 长度以 32 位大端无符号整数写入，每个像素字节的 LSB 存储 1 bit，
/// 因此头部恰好占用前 32 个像素字节。
pub const LENGTH_HEADER_BITS: usize = 32;

/// 每个字符（字节）占用的位数，同时也是其占用的像素字节数。
pub const BITS_PER_BYTE: usize = 8;
