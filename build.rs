// build.rs
use serde::Deserialize;
use std::collections::HashMap;
use std::{env, fs, path::Path};

#[derive(Deserialize)]
struct FullJson {
    opcodes: Vec<RawOpcode>,
}

#[derive(Deserialize)]
struct RawOpcode {
    code: u8,
    mnemonic: String,
    variant: String,
    operands: Vec<String>,
    flags: HashMap<String, String>,
}

fn generate_vector_tests() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let destination = Path::new(&out_dir).join("generated_vector_tests.rs");

    let mut test_code = String::new();
    let vectors = glob::glob("tests/vectors/**/*.stim").expect("Failed to read glob pattern");

    for entry in vectors.filter_map(Result::ok) {
        let path = entry.to_str().unwrap();
        let golden = entry.with_extension("golden");
        if !golden.exists() {
            println!("cargo:warning=No golden trace for {}, skipping", path);
            continue;
        }

        let name = path
            .replace(['/', '\\', '-', '.', ' '], "_")
            .replace("__", "_");
        let name = name.strip_prefix("tests_vectors_").unwrap_or(&name);

        test_code.push_str(&format!(
            "#[test] fn {}() {{ run_vector(r#\"{}\"#, r#\"{}\"#); }}\n",
            name,
            path,
            golden.to_str().unwrap()
        ));
    }

    fs::write(destination, test_code).unwrap();
}

fn map_operand(operand: &str) -> String {
    match operand {
        "A" => "Operand::A".into(),
        "B" => "Operand::B".into(),
        "B[2:0]" => "Operand::Amount".into(),
        _ => panic!("Unknown operand in JSON: {}", operand),
    }
}

fn map_flag_action(action: &str) -> String {
    match action {
        "C" | "V" => "FlagAction::Calculate".to_string(),
        "0" => "FlagAction::Reset".to_string(),
        _ => panic!("Unknown flag action in JSON: {}", action),
    }
}

fn main() {
    let json_str =
        fs::read_to_string("src/opcodes/data/opcodes.json").expect("Missing opcodes.json");
    let data: FullJson = serde_json::from_str(&json_str).expect("JSON parse error");

    assert_eq!(
        data.opcodes.len(),
        16,
        "opcodes.json must describe all 16 encodings"
    );

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("opcodes_generated.rs");
    let mut code = String::new();

    code.push_str("pub static OPCODES: [OpcodeInfo; 16] = [\n");
    for (i, op) in data.opcodes.iter().enumerate() {
        assert_eq!(
            op.code as usize, i,
            "opcodes.json entries must be ordered by code, found {} at {}",
            op.code, i
        );

        let operands: Vec<String> = op.operands.iter().map(|o| map_operand(o)).collect();
        let flag = |key: &str| {
            let action = op
                .flags
                .get(key)
                .unwrap_or_else(|| panic!("{} is missing flag {}", op.mnemonic, key));
            map_flag_action(action)
        };

        code.push_str(&format!(
            "    OpcodeInfo {{ code: {}, op: OpCode::{}, mnemonic: {:?}, operands: &[{}], flags: FlagSpec {{ carry: {}, overflow: {} }} }},\n",
            op.code,
            op.variant,
            op.mnemonic,
            operands.join(", "),
            flag("C"),
            flag("V"),
        ));
    }
    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    generate_vector_tests();
    println!("cargo:rerun-if-changed=src/opcodes/data/opcodes.json");
    println!("cargo:rerun-if-changed=tests/vectors");
    println!("cargo:rerun-if-changed=build.rs");
}
