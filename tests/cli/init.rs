use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["callee"], "i18n");
    assert_eq!(parsed["outputSuffix"], "cache");
    assert!(
        parsed.get("pattern").is_some(),
        "Config should have 'pattern' field"
    );
    assert!(
        parsed.get("ignoreTexts").is_some(),
        "Config should have 'ignoreTexts' field"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .cn2i18nrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".cn2i18nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cn2i18nrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .cn2i18nrc.json already exists
    ");
    assert_eq!(test.read_file(".cn2i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("index.js", "const a = \"你好\";\n")?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "Rewrite should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("index.cache.js").exists());

    Ok(())
}
