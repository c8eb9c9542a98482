use anyhow::Ok;
use image::{ImageBuffer, Rgb};
use lsb_seal::{
    cli::{DecodeArgs, EncodeArgs},
    handler::{handle_decode, handle_encode},
};
use rand::RngCore;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

/// 一个辅助函数，用于创建一个带有随机像素的测试图像
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut img_buf = ImageBuffer::new(width, height);
    let mut raw_pixels = vec![0u8; (width * height * 3) as usize];
    rand::rng().fill_bytes(&mut raw_pixels);

    img_buf
        .pixels_mut()
        .zip(raw_pixels.chunks_exact(3))
        .for_each(|(pixel, chunk)| {
            *pixel = Rgb([chunk[0], chunk[1], chunk[2]]);
        });

    img_buf.save(path).expect("Failed to create test image.");
}

/// 验证从封入到恢复的完整流程
#[test]
fn test_handle_encode_and_decode_integration() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let sealed_image_path = dir.path().join("sealed.png");
    let source_text_path = dir.path().join("source.txt");
    let recovered_text_path = dir.path().join("recovered.txt");

    create_test_image(&original_image_path, 100, 100);
    let original_text = "This is a test message for the handler! 这是一个给处理器的测试信息！";
    fs::write(&source_text_path, original_text)?;

    // 2. 测试 handle_encode
    let encode_args = EncodeArgs {
        image: original_image_path.clone(),
        text: source_text_path.clone(),
        password: "secret".to_owned(),
        dest: Some(sealed_image_path.clone()),
        force: false,
    };
    handle_encode(encode_args)?;
    assert!(sealed_image_path.exists(), "Sealed image should be created.");

    // 3. 测试 handle_decode
    let decode_args = DecodeArgs {
        image: sealed_image_path.clone(),
        password: "secret".to_owned(),
        text: Some(recovered_text_path.clone()),
        force: false,
    };
    handle_decode(decode_args)?;
    assert!(
        recovered_text_path.exists(),
        "Recovered text file should be created."
    );

    // 4. 验证结果
    let recovered_text = fs::read_to_string(&recovered_text_path)?;
    assert_eq!(
        original_text, recovered_text,
        "Recovered text must match the original."
    );

    Ok(())
}

/// 验证当用户不提供输出路径时，是否能正确生成默认路径并完成操作
#[test]
fn test_handle_encode_and_decode_with_defaults() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let original_image_path = dir.path().join("original.png");
    let source_text_path = dir.path().join("source.txt");

    create_test_image(&original_image_path, 100, 100);
    let original_text = "Testing default path generation. 测试默认路径生成。";
    fs::write(&source_text_path, original_text)?;

    // 2. 测试 handle_encode，不提供 dest 路径
    let encode_args = EncodeArgs {
        image: original_image_path.clone(),
        text: source_text_path.clone(),
        password: "secret".to_owned(),
        dest: None, // 关键：测试 None 的情况
        force: false,
    };
    handle_encode(encode_args)?;

    // 验证默认的封入图像文件是否已创建
    let expected_sealed_path = dir.path().join("sealed_original.png");
    assert!(
        expected_sealed_path.exists(),
        "Default sealed image should be created at: {:?}",
        expected_sealed_path
    );

    // 3. 测试 handle_decode，不提供 text 输出路径
    let decode_args = DecodeArgs {
        image: expected_sealed_path, // 使用上一步生成的默认文件
        password: "secret".to_owned(),
        text: None, // 关键：测试 None 的情况
        force: false,
    };
    handle_decode(decode_args)?;

    // 验证默认的恢复文本文件是否已创建
    let expected_recovered_path = dir.path().join("recovered_sealed_original.txt");
    assert!(
        expected_recovered_path.exists(),
        "Default recovered text file should be created at: {:?}",
        expected_recovered_path
    );

    // 4. 验证结果
    let recovered_text = fs::read_to_string(&expected_recovered_path)?;
    assert_eq!(
        original_text, recovered_text,
        "Recovered text from default file must match the original."
    );

    Ok(())
}

/// 验证覆盖保护机制以及 `--force` 标志是否按预期工作
#[test]
fn test_overwrite_protection_and_force_flag() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let text_path = dir.path().join("text.txt");
    let dest_path = dir.path().join("dest.png");

    create_test_image(&image_path, 50, 50);
    fs::write(&text_path, "some text")?;

    // 2. 场景一：测试覆盖保护
    // 先创建一个同名的目标文件，模拟“文件已存在”的场景
    fs::write(&dest_path, "this is a dummy file to be overwritten")?;
    assert!(dest_path.exists());

    // 构建参数，不使用 --force
    let encode_args_no_force = EncodeArgs {
        image: image_path.clone(),
        text: text_path.clone(),
        password: "pw".to_owned(),
        dest: Some(dest_path.clone()),
        force: false,
    };

    // 执行并断言操作会失败
    let result = handle_encode(encode_args_no_force);
    assert!(
        result.is_err(),
        "Execution should fail without --force when file exists."
    );
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    // 3. 场景二：测试强制覆盖
    // 构建参数，这次使用 --force
    let encode_args_with_force = EncodeArgs {
        image: image_path.clone(),
        text: text_path.clone(),
        password: "pw".to_owned(),
        dest: Some(dest_path.clone()),
        force: true,
    };

    // 执行并断言操作会成功
    let result = handle_encode(encode_args_with_force);
    assert!(
        result.is_ok(),
        "Execution should succeed with --force when file exists."
    );

    // 验证文件确实被覆盖（内容不再是 "this is a dummy file..."）
    let dummy_content = fs::read(&dest_path)?;
    assert_ne!(dummy_content, b"this is a dummy file to be overwritten");

    Ok(())
}

/// 验证输出扩展名与实际格式不符时仍按 PNG 写入指定路径
#[test]
fn test_handle_encode_mismatched_dest_extension() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let text_path = dir.path().join("text.txt");
    let dest_path = dir.path().join("dest.bmp");

    create_test_image(&image_path, 50, 50);
    fs::write(&text_path, "format check")?;

    // 2. 执行：目标路径使用 .bmp 扩展名
    let encode_args = EncodeArgs {
        image: image_path,
        text: text_path,
        password: "pw".to_owned(),
        dest: Some(dest_path.clone()),
        force: false,
    };
    handle_encode(encode_args)?;

    // 3. 验证：文件写到了用户指定的路径，内容始终是 PNG
    let written = fs::read(&dest_path)?;
    assert!(
        written.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Output must be PNG-encoded regardless of the destination extension."
    );

    Ok(())
}

/// 验证容量不足时的错误处理
#[test]
fn test_handle_encode_not_enough_capacity() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("small.png");
    let text_path = dir.path().join("large.txt");
    let dest_path = dir.path().join("dest.png");

    // 创建一个非常小的图片
    create_test_image(&image_path, 10, 10);
    // 创建一个非常大的文本
    let large_text = "a".repeat(5000);
    fs::write(&text_path, large_text)?;

    // 2. 执行并断言错误
    let encode_args = EncodeArgs {
        image: image_path,
        text: text_path,
        password: "pw".to_owned(),
        dest: Some(dest_path),
        force: false,
    };
    let result = handle_encode(encode_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.root_cause().to_string().contains("Message too long"));
    }

    Ok(())
}

/// 验证密码错误时 handler 报告失败
#[test]
fn test_handle_decode_wrong_password() -> anyhow::Result<()> {
    // 1. 准备环境
    let dir = tempdir()?;
    let image_path = dir.path().join("image.png");
    let text_path = dir.path().join("text.txt");
    let sealed_path = dir.path().join("sealed.png");
    let recovered_path = dir.path().join("recovered.txt");

    create_test_image(&image_path, 50, 50);
    fs::write(&text_path, "top secret message")?;

    let encode_args = EncodeArgs {
        image: image_path,
        text: text_path,
        password: "correct".to_owned(),
        dest: Some(sealed_path.clone()),
        force: false,
    };
    handle_encode(encode_args)?;

    // 2. 用错误的密码解码
    let decode_args = DecodeArgs {
        image: sealed_path,
        password: "incorrect".to_owned(),
        text: Some(recovered_path.clone()),
        force: false,
    };
    let result = handle_decode(decode_args);

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.root_cause().to_string().contains("Incorrect password"));
    }
    assert!(
        !recovered_path.exists(),
        "No text file should be written on failure."
    );

    Ok(())
}
