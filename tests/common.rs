use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use ice_maze_solver::Direction;

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENTION: &str = "map";

#[allow(unused)]
pub fn parse_direction(ch: char) -> Result<Direction> {
    Ok(match ch {
        'L' => Direction::Left,
        'R' => Direction::Right,
        'U' => Direction::Up,
        'D' => Direction::Down,
        _ => bail!("Invalid action: {ch:?}"),
    })
}

/// Line number and both sides of the first line where `got` and `expect`
/// disagree.
fn first_difference<'a>(got: &'a str, expect: &'a str) -> Option<(usize, &'a str, &'a str)> {
    let mut got_lines = got.lines();
    let mut expect_lines = expect.lines();
    for line_no in 1.. {
        match (got_lines.next(), expect_lines.next()) {
            (None, None) => return None,
            (g, e) if g != e => return Some((line_no, g.unwrap_or("<eof>"), e.unwrap_or("<eof>"))),
            _ => {}
        }
    }
    unreachable!()
}

fn collect_maps(subdir: &str) -> Vec<(String, PathBuf)> {
    let mut maps = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENTION) {
                return None;
            }
            let name = path.file_stem()?.to_str()?.to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    maps.sort();
    assert!(!maps.is_empty(), "No .{EXTENTION} files in {TEST_DIR}/{subdir}");
    maps
}

/// Runs `f` on every `.map` file under `tests/{subdir}` and compares the
/// result with the file content. `UPDATE_EXPECT=1` rewrites the files.
pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let maps = collect_maps(subdir);
    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed = Vec::new();
    let mut updated = 0;
    for (name, path) in &maps {
        eprint!("{subdir}/{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("\x1B[32mOK\x1B[0m"),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("\x1B[33mUpdated\x1B[0m");
                updated += 1;
            }
            Ok(got) => {
                eprintln!("\x1B[31mFAILED\x1B[0m");
                if let Some((line_no, got, expect)) = first_difference(&got, &content) {
                    eprintln!("  line {line_no}:\n    got:    {got:?}\n    expect: {expect:?}");
                }
                failed.push(name);
            }
            Err(err) => {
                eprintln!("\x1B[31mFAILED\x1B[0m\n{:?}", err);
                failed.push(name);
            }
        }
    }

    if updated != 0 {
        eprintln!("{updated}/{} expectations updated", maps.len());
    }
    if !failed.is_empty() {
        eprintln!("{}/{} tests failed: {failed:?}", failed.len(), maps.len());
        std::process::exit(1);
    }
}
