//! End-to-end conversions of BMF files on disk.

use std::fs;

use bmf_converter::{ConvertConfig, convert_file, error::BmfError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_font(dir: &TempDir, name: &str, contents: &str) -> ConvertConfig {
    let input = dir.path().join(name);
    fs::write(&input, contents).unwrap();

    ConvertConfig {
        height: 0,
        width: 0,
        input,
    }
}

fn run(config: &ConvertConfig) -> anyhow::Result<String> {
    let mut output = Vec::new();
    convert_file(config, &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn sparse_three_by_two_font() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig {
        height: 2,
        width: 3,
        ..write_font(&dir, "Tiny.bmf", "|65 $E0 160\n\n|67 64 64\n")
    };

    assert_eq!(
        run(&config).unwrap(),
        "const uint8_t _tiny_2pt7bBitmaps[] = { 244,72 };\n\
         \n\
         \n\
         const FONTGlyph _tiny_2pt7bGlyphs[] = {\n\
         \n\
         \t\t{0,3,2,4,0,-2},\n\
         \t\t{65535,3,2,4,0,-2},\n\
         \t\t{1,3,2,4,0,-2}\n\
         };\n\
         \n\
         \n\
         const FONTInfo _tiny_2pt7b = {\n\
         \t\t(uint8_t  *)_tiny_2pt7bBitmaps,\n\
         \t\t(FONTGlyph *)_tiny_2pt7bGlyphs,\n\
         \t\t65,67,3 };\n\
         \n\
         \n"
    );
}

#[test]
fn glyph_markers_continue_sequentially() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig {
        height: 1,
        width: 8,
        ..write_font(&dir, "seq.bmf", "|A 128 | 64 | 32")
    };

    let output = run(&config).unwrap();
    assert!(output.contains("_seq_1pt7bBitmaps[] = { 128,64,32 };"));
    assert!(output.contains("\t\t{0,8,1,8,0,-1},\n\t\t{1,8,1,8,0,-1},\n\t\t{2,8,1,8,0,-1}\n};"));
    assert!(output.contains("\t\t65,67,2 };"));
}

#[test]
fn missing_file() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig {
        height: 8,
        width: 8,
        input: dir.path().join("absent.bmf"),
    };

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("absent.bmf"));
    assert!(err.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn errors_produce_no_output() {
    let dir = TempDir::new().unwrap();
    let config = ConvertConfig {
        height: 8,
        width: 8,
        ..write_font(&dir, "dup.bmf", "|65 1 2\n|66 3\n|65 4\n")
    };

    let mut output = Vec::new();
    let err = convert_file(&config, &mut output).unwrap_err();

    assert!(output.is_empty());
    assert_eq!(
        err.downcast_ref::<BmfError>(),
        Some(&BmfError::DuplicateGlyph { code: 65, line: 3 })
    );
}

#[test]
fn uninitialized_and_malformed() {
    let dir = TempDir::new().unwrap();

    let config = ConvertConfig {
        height: 8,
        width: 8,
        ..write_font(&dir, "uninit.bmf", "12 |65")
    };
    assert_eq!(
        run(&config).unwrap_err().downcast_ref::<BmfError>(),
        Some(&BmfError::UninitializedGlyph { line: 1 })
    );

    let config = ConvertConfig {
        height: 8,
        width: 8,
        ..write_font(&dir, "malformed.bmf", "|65 0x10")
    };
    assert_eq!(
        run(&config).unwrap_err().downcast_ref::<BmfError>(),
        Some(&BmfError::MalformedTerm {
            token: "0x10".to_owned(),
            line: 1
        })
    );
}

#[test]
fn identifier_ignores_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    let input = dir.path().join("nested").join("Mono.bmf");
    fs::write(&input, "|32 0").unwrap();

    let config = ConvertConfig {
        height: 8,
        width: 8,
        input,
    };
    assert_eq!(config.identifier(), "_mono_8pt7b");

    let output = run(&config).unwrap();
    assert!(output.starts_with("const uint8_t _mono_8pt7bBitmaps[] = { 0,0,0,0,0,0,0,0 };"));
    assert!(output.contains("const FONTInfo _mono_8pt7b = {"));
}
