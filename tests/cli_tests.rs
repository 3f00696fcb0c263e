use std::process::Command;

fn pepscan() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pepscan"))
}

#[test]
fn test_report_output() {
    let output = pepscan().args(["MKVLAA", "--no-plot"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Amino Acid Count: 6\n\
         Instability Index: 74.00\n\
         \n\
         Codon Usage Report:\n\
         MKV: 1\n\
         LAA: 1\n"
    );
}

#[test]
fn test_missing_sequence() {
    let output = pepscan().output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_empty_sequence() {
    let output = pepscan().args(["", "--no-plot"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("InvalidInput"));
}

#[test]
fn test_codon_table_export() {
    let dir = std::env::temp_dir().join(format!("pepscan_cli_{}", std::process::id()));
    let path = dir.join("codons.csv");

    let output = pepscan()
        .args(["MKVMKVL", "--no-plot", "--codon-table"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.contains("MKV,2,"));

    // clean up
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_charts_written_to_plot_dir() {
    let dir = std::env::temp_dir().join(format!("pepscan_cli_plots_{}", std::process::id()));

    let output = pepscan()
        .args(["MKVLAA", "--format", "svg", "--plot-dir"])
        .arg(&dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Amino Acid Count: 6\n"));

    for name in ["hydropathy.svg", "codon_usage.svg"] {
        assert!(std::fs::metadata(dir.join(name)).unwrap().len() > 0);
    }

    // clean up
    std::fs::remove_dir_all(&dir).unwrap();
}
