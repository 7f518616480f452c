//! End-to-end tests of the `generate-jwt` binary.

use anyhow::Result;
use issuer_test_utils::{TokenAssertions, TEST_SECRET};
use std::ffi::OsStr;
use std::process::{Command, Output};
use token_issuer::issuer::{DEFAULT_EXPIRY_YEARS, SECONDS_PER_YEAR};

fn generate_jwt<S: AsRef<OsStr>>(args: &[S]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_generate-jwt"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

/// Pull the token printed under `label` out of the CLI output.
fn token_after<'a>(stdout: &'a str, label: &str) -> Result<&'a str> {
    let mut lines = stdout.lines();
    lines
        .by_ref()
        .find(|line| *line == format!("{label}:"))
        .ok_or_else(|| anyhow::anyhow!("label {label} not found"))?;
    lines
        .next()
        .ok_or_else(|| anyhow::anyhow!("no token after {label}"))
}

#[test]
fn test_no_arguments_prints_usage() -> Result<()> {
    let output = generate_jwt::<&str>(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr)?.trim_end(),
        "Usage: generate-jwt <SECRET>"
    );

    Ok(())
}

#[test]
fn test_empty_secret_prints_usage() -> Result<()> {
    let output = generate_jwt(&[""])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("Usage: generate-jwt <SECRET>"));

    Ok(())
}

#[test]
fn test_secret_prints_both_tokens() -> Result<()> {
    let output = generate_jwt(&[TEST_SECRET])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    let lifetime = i64::from(DEFAULT_EXPIRY_YEARS) * SECONDS_PER_YEAR;

    token_after(&stdout, "ANON_TOKEN")?
        .assert_valid_jwt()
        .assert_role("anon")
        .assert_expires_in(lifetime, 5)
        .assert_signed_with(TEST_SECRET.as_bytes());

    token_after(&stdout, "SERVICE_ROLE_TOKEN")?
        .assert_valid_jwt()
        .assert_role("service_role")
        .assert_expires_in(lifetime, 5)
        .assert_signed_with(TEST_SECRET.as_bytes());

    Ok(())
}

#[test]
fn test_output_layout_is_exact() -> Result<()> {
    let output = generate_jwt(&[TEST_SECRET])?;
    let stdout = String::from_utf8(output.stdout)?;

    let lines: Vec<&str> = stdout.split('\n').collect();
    assert_eq!(lines.len(), 6, "unexpected output: {stdout:?}");
    assert_eq!(lines.first(), Some(&"ANON_TOKEN:"));
    assert_eq!(lines.get(2), Some(&""));
    assert_eq!(lines.get(3), Some(&"SERVICE_ROLE_TOKEN:"));
    // Trailing newline after the last token
    assert_eq!(lines.last(), Some(&""));

    Ok(())
}

#[test]
fn test_extra_arguments_are_ignored() -> Result<()> {
    let output = generate_jwt(&[TEST_SECRET, "ignored"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    token_after(&stdout, "ANON_TOKEN")?.assert_signed_with(TEST_SECRET.as_bytes());

    Ok(())
}

#[test]
fn test_default_run_keeps_stderr_clean() -> Result<()> {
    let output = generate_jwt(&[TEST_SECRET])?;
    assert!(output.stderr.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_non_utf8_secret_is_used_as_raw_bytes() -> Result<()> {
    use std::os::unix::ffi::OsStrExt;

    let secret: &[u8] = &[0x73, 0x65, 0xff, 0xfe, 0x63];
    let output = generate_jwt(&[OsStr::from_bytes(secret)])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;

    token_after(&stdout, "ANON_TOKEN")?
        .assert_valid_jwt()
        .assert_role("anon")
        .assert_signed_with(secret);
    token_after(&stdout, "SERVICE_ROLE_TOKEN")?
        .assert_valid_jwt()
        .assert_role("service_role")
        .assert_signed_with(secret);

    Ok(())
}
