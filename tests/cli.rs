use std::path::Path;
use std::process::{Command, Output};

const CTL: &str = "\
1|31|top|( hyprland/workspaces )|( clock )|( tray )
2|40|top|( hyprland/workspaces wlr/taskbar )|( clock )|( pulseaudio battery tray )
# mechabar
3|36|bottom|()|( idle_inhibitor clock )|( backlight )
";

fn bar_kit(args: &[&str], config_home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bar-kit"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn bar-kit")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn layouts_dry_run_keeps_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctl = dir.path().join("config.ctl");
    std::fs::write(&ctl, CTL).expect("seed ctl");

    let out = bar_kit(&["layouts", "--dry-run", "--config-ctl", ctl.to_str().unwrap()], dir.path());
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("DRY RUN: Would add 10 theme layout entries:"));
    assert!(stdout(&out).contains("4|40|top|( hyprland/workspaces wlr/taskbar )"));
    assert_eq!(std::fs::read_to_string(&ctl).unwrap(), CTL);
}

#[test]
fn layouts_appends_to_default_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctl = dir.path().join("waybar/config.ctl");
    std::fs::create_dir_all(ctl.parent().unwrap()).unwrap();
    std::fs::write(&ctl, CTL).expect("seed ctl");

    let out = bar_kit(&["layouts"], dir.path());
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Next available index: 14"));

    let after = std::fs::read_to_string(&ctl).unwrap();
    assert!(after.starts_with(CTL));
    assert!(after.contains("# woioeows-configuration\n13|40|top|"));
}

#[test]
fn missing_control_file_exits_with_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = bar_kit(&["layouts"], dir.path());
    assert_eq!(out.status.code(), Some(1));

    let out = bar_kit(&["generate", "--index", "1"], dir.path());
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn generate_requires_an_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = bar_kit(&["generate"], dir.path());
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn generate_by_theme_and_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctl = dir.path().join("config.ctl");
    let output = dir.path().join("out/config.jsonc");
    std::fs::write(&ctl, CTL).expect("seed ctl");

    let out = bar_kit(
        &[
            "generate",
            "--theme",
            "mechabar",
            "--config-ctl",
            ctl.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(0));
    let text = std::fs::read_to_string(&output).expect("config written");
    assert!(text.contains("// sourced from config.ctl entry 3 //"));
    assert!(text.contains("\"position\": \"bottom\","));

    let out = bar_kit(
        &["generate", "--index", "9", "--config-ctl", ctl.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn generate_dry_run_prints_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ctl = dir.path().join("config.ctl");
    let output = dir.path().join("out/config.jsonc");
    std::fs::write(&ctl, CTL).expect("seed ctl");

    let out = bar_kit(
        &[
            "generate",
            "--dry-run",
            "--index",
            "2",
            "--config-ctl",
            ctl.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("// sourced from config.ctl entry 2 //"));
    assert!(text.contains("\"height\": 40,"));
    assert!(text.contains("        \"wlr/taskbar\"\n"));
    assert!(!output.exists());
    assert!(!dir.path().join("out").exists());
}

#[test]
fn templatize_dry_run_keeps_stylesheets() {
    let dir = tempfile::tempdir().expect("tempdir");
    let themes = dir.path().join("themes");
    std::fs::create_dir_all(&themes).unwrap();
    let css = "window#waybar { background: rgba(0, 0, 0, 0.05); color: #ffffff; }\n";
    let path = themes.join("theme-mechabar.css");
    std::fs::write(&path, css).unwrap();

    let out = bar_kit(
        &["templatize", "--dry-run", "--verbose", "--theme-dir", themes.to_str().unwrap()],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("Processing: mechabar"));
    assert!(text.contains("✓ 2 color(s) replaced"));
    assert!(text.contains("rgba(0, 0, 0, 0.05) → @bar-bg [Transparent bar background]"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), css);
    assert!(!themes.join("theme-mechabar.css.bak").exists());
}
