use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_battleship-lobby"))
        .args(["sim", "--games", "2", "--seed", "42", "--poll-ms", "200"])
        .output()
        .expect("failed to run battleship-lobby binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 2);
    assert_eq!(v["won"], 2);
    assert_eq!(v["players"].as_array().map(|p| p.len()), Some(4));
}
