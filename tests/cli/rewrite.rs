use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP: &str = r#"import React from "react";

export function App({ name }) {
    const labels = { "标题": "title" };
    return (
        <div title="欢迎">
            <h1>你好</h1>
            <p>{`你好${name}`}</p>
            <span>Hello</span>
        </div>
    );
}
"#;

#[test]
fn test_default_input_and_output() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"你好\";\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Rewrote 1 string in index.js → index.cache.js

    ----- stderr -----
    ");

    let rewritten = test.read_file("index.cache.js")?;
    assert!(rewritten.contains("const a = i18n(\"nihao\");"), "got:\n{}", rewritten);
    assert_eq!(test.read_file("index.js")?, "const a = \"你好\";\n");

    Ok(())
}

#[test]
fn test_rewrites_every_shape() -> Result<()> {
    let test = CliTest::with_file("src/App.jsx", APP)?;

    assert_cmd_snapshot!(test.command().arg("src/App.jsx"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Rewrote 4 strings in src/App.jsx → src/App.cache.jsx

    ----- stderr -----
    ");

    let rewritten = test.read_file("src/App.cache.jsx")?;
    for expected in [
        "[i18n(\"biaoti\")]: \"title\"",
        "title={i18n(\"huanying\")}",
        "<h1>{i18n(\"nihao\")}</h1>",
        "`${i18n(\"nihao\")}${name}`",
        "<span>Hello</span>",
        "import React from \"react\";",
    ] {
        assert!(
            rewritten.contains(expected),
            "missing {:?} in:\n{}",
            expected,
            rewritten
        );
    }

    Ok(())
}

#[test]
fn test_input_and_output_flags() -> Result<()> {
    let test = CliTest::with_file("src/page.tsx", "export const t: string = \"页面\";\n")?;

    let output = test
        .command()
        .args(["-i", "src/page.tsx", "--output", "dist/page.tsx"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let rewritten = test.read_file("dist/page.tsx")?;
    assert!(rewritten.contains("i18n(\"yemian\")"), "got:\n{}", rewritten);
    assert!(!test.root().join("src/page.cache.tsx").exists());

    Ok(())
}

#[test]
fn test_positional_output() -> Result<()> {
    let test = CliTest::with_file("a.js", "let s = '中文';\n")?;

    let output = test.command().args(["a.js", "b.js"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("in a.js → b.js"));
    assert!(test.read_file("b.js")?.contains("i18n(\"zhongwen\")"));

    Ok(())
}

#[test]
fn test_stdout_mode_writes_no_file() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"你好\";\n")?;

    assert_cmd_snapshot!(test.command().arg("--stdout"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    const a = i18n("nihao");

    ----- stderr -----
    ✓ Rewrote 1 string in index.js
    "#);
    assert!(!test.root().join("index.cache.js").exists());

    Ok(())
}

#[test]
fn test_keys_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "index.js",
        "const a = \"你好\";\nconst b = \"世界\";\nconst c = \"你好\";\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("--keys"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "nihao": "你好",
      "shijie": "世界"
    }

    ----- stderr -----
    ✓ Rewrote 3 strings in index.js → index.cache.js
    "#);
    assert!(test.root().join("index.cache.js").exists());

    Ok(())
}

#[test]
fn test_verbose_lists_replacements() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = 1;\nconst b = \"你好\";\n")?;

    assert_cmd_snapshot!(test.command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    index.js:2:11  string  nihao  你好
    ✓ Rewrote 1 string in index.js → index.cache.js

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_callee_and_suffix() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"你好\";\n")?;
    test.write_file(
        ".cn2i18nrc.json",
        r#"{ "callee": "t", "outputSuffix": "zh" }"#,
    )?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.read_file("index.zh.js")?.contains("const a = t(\"nihao\");"));

    Ok(())
}

#[test]
fn test_callee_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"你好\";\n")?;
    test.write_file(".cn2i18nrc.json", r#"{ "callee": "t" }"#)?;

    let output = test.command().args(["--callee", "$t"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.read_file("index.cache.js")?.contains("$t(\"nihao\")"));

    Ok(())
}

#[test]
fn test_invalid_callee_flag() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"你好\";\n")?;

    assert_cmd_snapshot!(test.command().args(["--callee", "i18n.t"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid 'callee': "i18n.t" is not an identifier
    "#);
    assert!(!test.root().join("index.cache.js").exists());

    Ok(())
}

#[test]
fn test_parse_failure_skips_file() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"你好\" +;\n")?;

    // the reason names the absolute input path and the parser's message
    insta::with_settings!({ filters => vec![(r"  = .*", "  = [REASON]")] }, {
        assert_cmd_snapshot!(test.command(), @r"
        success: false
        exit_code: 1
        ----- stdout -----

        ----- stderr -----
        ✘ Skipped index.js: could not be parsed, nothing written
          = [REASON]
        ");
    });
    assert!(!test.root().join("index.cache.js").exists());

    Ok(())
}

#[test]
fn test_missing_input_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Failed to read file:"));

    Ok(())
}

#[test]
fn test_no_target_script_still_writes_output() -> Result<()> {
    let test = CliTest::with_file("index.js", "const a = \"hello\";\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Rewrote 0 strings in index.js → index.cache.js

    ----- stderr -----
    ");
    assert!(test.read_file("index.cache.js")?.contains("const a = \"hello\";"));

    Ok(())
}

#[test]
fn test_key_collision_warning() -> Result<()> {
    // 你好 and 拟好 romanize identically without tones
    let test = CliTest::with_file("index.js", "const a = \"你好\";\nconst b = \"拟好\";\n")?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Rewrote 2 strings in index.js → index.cache.js

    ----- stderr -----
    warning: key "nihao" is shared by 2 texts: "你好", "拟好"
    "#);

    Ok(())
}
