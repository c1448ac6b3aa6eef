//! Integration tests for the png2src CLI
//!
//! These tests write small indexed PNGs into temporary directories, run the
//! binary against them and check exit codes and generated source.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Get the path to the png2src binary
fn png2src_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_png2src"))
}

/// Run png2src in `dir` so no stray png2src.toml above the test tree is picked up
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(png2src_binary())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute png2src")
}

const BLACK_WHITE: [u8; 6] = [0, 0, 0, 255, 255, 255];
const FOUR_COLORS: [u8; 12] = [0, 0, 0, 85, 85, 85, 170, 170, 170, 255, 255, 255];

/// Write an 8-bit indexed PNG
fn write_indexed_png(path: &Path, width: u32, height: u32, plte: &[u8], indices: &[u8]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(plte.to_vec());
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(indices).unwrap();
}

/// Write an RGBA PNG (no palette)
fn write_rgba_png(path: &Path, width: u32, height: u32) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&vec![255; (width * height * 4) as usize]).unwrap();
}

/// A temp dir with `hero.png` (8x1, first pixel white) and `Gem Stone.png` (4x1, 2bpp)
fn fixture_dir() -> TempDir {
    let dir = tempdir().unwrap();
    let mut hero = [0u8; 8];
    hero[0] = 1;
    write_indexed_png(&dir.path().join("hero.png"), 8, 1, &BLACK_WHITE, &hero);
    write_indexed_png(&dir.path().join("Gem Stone.png"), 4, 1, &FOUR_COLORS, &[0, 1, 2, 3]);
    dir
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_target_is_assemblyscript_on_stdout() {
    let dir = fixture_dir();
    let output = run(dir.path(), &["hero.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "// hero\n\
         const heroWidth = 8;\n\
         const heroHeight = 1;\n\
         const heroFlags = 0; // BLIT_1BPP\n\
         const hero = memory.data<u8>([ 0x80 ]);\n\n"
    );
}

#[test]
fn test_rust_target_two_sprites_in_order() {
    let dir = fixture_dir();
    let output = run(dir.path(), &["--rust", "Gem Stone.png", "hero.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let text = stdout_of(&output);
    assert_eq!(
        text,
        "// Gem_Stone\n\
         const GEM__STONE_WIDTH: u32 = 4;\n\
         const GEM__STONE_HEIGHT: u32 = 1;\n\
         const GEM__STONE_FLAGS: u32 = 1; // BLIT_2BPP\n\
         const GEM__STONE: [u8; 1] = [ 0x1b ];\n\
         \n\
         // hero\n\
         const HERO_WIDTH: u32 = 8;\n\
         const HERO_HEIGHT: u32 = 1;\n\
         const HERO_FLAGS: u32 = 0; // BLIT_1BPP\n\
         const HERO: [u8; 1] = [ 0x80 ];\n\n"
    );
}

#[test]
fn test_lang_option_and_output_file() {
    let dir = fixture_dir();
    let output = run(dir.path(), &["--lang", "c", "-o", "gen/sprites.h", "hero.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).is_empty());
    let written = fs::read_to_string(dir.path().join("gen/sprites.h")).unwrap();
    assert!(written.contains("#define heroFlags BLIT_1BPP"));
    assert!(written.contains("const uint8_t hero[1] = { 0x80 };"));
}

#[test]
fn test_custom_template_file() {
    let dir = fixture_dir();
    fs::write(
        dir.path().join("list.mustache"),
        "{{#sprites}}{{name}} {{width}}x{{height}} {{length}} [{{firstByte}}|{{restBytes}}]\n{{/sprites}}",
    )
    .unwrap();
    let output = run(dir.path(), &["-t", "list.mustache", "hero.png", "Gem Stone.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "hero 8x1 1 [0x80|]\nGem_Stone 4x1 1 [0x1b|]\n");
}

#[test]
fn test_directory_input_sorted() {
    let dir = fixture_dir();
    let output = run(dir.path(), &["--c", "."]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let text = stdout_of(&output);
    let gem = text.find("// Gem_Stone").expect("Gem_Stone block");
    let hero = text.find("// hero").expect("hero block");
    assert!(gem < hero);
}

#[test]
fn test_conflicting_targets_are_usage_error() {
    let dir = fixture_dir();
    let output = run(dir.path(), &["--rust", "--zig", "hero.png"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_failure_aborts_batch_and_writes_nothing() {
    let dir = fixture_dir();
    write_indexed_png(&dir.path().join("narrow.png"), 5, 1, &BLACK_WHITE, &[0; 5]);
    let output = run(dir.path(), &["-o", "out.ts", "hero.png", "narrow.png", "Gem Stone.png"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Error processing narrow.png"), "stderr: {}", stderr);
    assert!(stderr.contains("1BPP sprites must have a width divisible by 8"));
    assert!(!dir.path().join("out.ts").exists());
}

#[test]
fn test_pixel_index_past_palette_fails() {
    let dir = tempdir().unwrap();
    write_indexed_png(&dir.path().join("corrupt.png"), 8, 1, &BLACK_WHITE, &[1, 7, 0, 0, 0, 0, 0, 0]);
    let output = run(dir.path(), &["corrupt.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("uses palette index 7 but the palette has 2 entries"));
}

#[test]
fn test_truecolor_png_reports_missing_palette() {
    let dir = tempdir().unwrap();
    write_rgba_png(&dir.path().join("photo.png"), 8, 1);
    let output = run(dir.path(), &["photo.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Does not have indexed color palette"));
}

#[test]
fn test_five_color_palette_fails() {
    let dir = tempdir().unwrap();
    let plte: Vec<u8> = (0..5u8).flat_map(|i| [i, i, i]).collect();
    write_indexed_png(&dir.path().join("five.png"), 4, 1, &plte, &[0, 1, 2, 3]);
    let output = run(dir.path(), &["five.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Palette is larger than 4 colors"));
}

#[test]
fn test_config_file_selects_target() {
    let dir = fixture_dir();
    fs::write(dir.path().join("png2src.toml"), "[emit]\nlang = \"zig\"\n").unwrap();
    let output = run(dir.path(), &["hero.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("const hero = [1]u8{ 0x80 };"));
}

#[test]
fn test_cli_target_overrides_config() {
    let dir = fixture_dir();
    fs::write(dir.path().join("png2src.toml"), "[emit]\nlang = \"zig\"\n").unwrap();
    let output = run(dir.path(), &["--go", "hero.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("var hero = [1]byte { 0x80 }"));
}

#[test]
fn test_invalid_config_is_usage_error() {
    let dir = fixture_dir();
    fs::write(dir.path().join("png2src.toml"), "[emit]\nlang = \"cobol\"\n").unwrap();
    let output = run(dir.path(), &["hero.png"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("emit.lang"));
}

#[test]
fn test_cli_target_replaces_invalid_config_lang() {
    let dir = fixture_dir();
    fs::write(dir.path().join("png2src.toml"), "[emit]\nlang = \"cobol\"\n").unwrap();
    let output = run(dir.path(), &["--rust", "hero.png"]);

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("const HERO: [u8; 1] = [ 0x80 ];"));
}

#[test]
fn test_missing_template_file_is_usage_error() {
    let dir = fixture_dir();
    let output = run(dir.path(), &["-t", "nope.mustache", "hero.png"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Cannot read template"));
}

#[test]
fn test_list_targets() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["--list-targets"]);

    assert!(output.status.success());
    let text = stdout_of(&output);
    for name in ["assemblyscript", "c", "d", "go", "nim", "odin", "rust", "zig"] {
        assert!(text.lines().any(|l| l.starts_with(name)), "missing {} in {}", name, text);
    }
}
