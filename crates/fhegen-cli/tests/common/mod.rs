#![allow(missing_docs, dead_code)]
//! Shared setup for CLI integration tests: a synthetic repository with a
//! Hardhat template, example sources, and a registry file.

use std::fs;
use std::path::Path;

pub const TEMPLATE_PKG: &str = r#"{
  "name": "hardhat-template",
  "description": "template",
  "version": "1.0.0",
  "scripts": {
    "compile": "hardhat compile"
  },
  "dependencies": {
    "hardhat": "^2.22.0",
    "@fhevm/solidity": "^0.7.0"
  }
}
"#;

pub const REGISTRY: &str = r#"
[[categories]]
id = "basic"
name = "Basic"
description = "Basic examples"

[[categories.examples]]
id = "fhe-counter"
source_path = "contracts/FHECounter.sol"
test_path = "test/FHECounter.ts"
description = "A simple encrypted counter"

[[categories.examples]]
id = "fhe-add"
source_path = "contracts/FHEAdd.sol"
test_path = "test/FHEAdd.ts"
fixture_path = "test/Shared.ts"
description = "Adding two encrypted numbers"

[[categories]]
id = "advanced"
name = "Advanced"
description = "Advanced examples"

[[categories.examples]]
id = "blind-auction"
source_path = "contracts/BlindAuction.sol"
test_path = "test/BlindAuction.ts"
fixture_path = "test/Shared.ts"
description = "A sealed-bid auction"

[categories.extra_dependencies]
"@openzeppelin/contracts" = "^5.0.2"
"#;

/// Lay out the synthetic repository under `root`.
pub fn setup_repo(root: &Path) {
    let template = root.join("hardhat-template");
    fs::create_dir_all(template.join("contracts")).unwrap();
    fs::create_dir_all(template.join("test")).unwrap();
    fs::create_dir_all(template.join("tasks")).unwrap();
    fs::create_dir_all(template.join("node_modules/junk")).unwrap();
    fs::write(template.join("package.json"), TEMPLATE_PKG).unwrap();
    fs::write(
        template.join("contracts/Template.sol"),
        "contract Template {\n}\n",
    )
    .unwrap();
    fs::write(template.join("test/Template.ts"), "// placeholder\n").unwrap();
    fs::write(
        template.join("tasks/Template.ts"),
        "task(\"task:template\", async () => ethers.getContract(\"Template\"));\n",
    )
    .unwrap();
    fs::write(template.join("node_modules/junk/x.js"), "x").unwrap();

    fs::create_dir_all(root.join("contracts")).unwrap();
    fs::create_dir_all(root.join("test")).unwrap();
    fs::write(
        root.join("contracts/FHECounter.sol"),
        "/// @notice Counts encrypted values\ncontract FHECounter is SepoliaConfig {\n}\n",
    )
    .unwrap();
    fs::write(root.join("test/FHECounter.ts"), "// counter test\n").unwrap();
    fs::write(root.join("contracts/FHEAdd.sol"), "contract FHEAdd {\n}\n").unwrap();
    fs::write(root.join("test/FHEAdd.ts"), "// add test\n").unwrap();
    fs::write(root.join("contracts/BlindAuction.sol"), "contract BlindAuction {\n}\n").unwrap();
    fs::write(root.join("test/BlindAuction.ts"), "// auction test\n").unwrap();
    fs::write(root.join("test/Shared.ts"), "// shared\n").unwrap();

    fs::write(root.join("examples.toml"), REGISTRY).unwrap();
    fs::write(root.join("fhegen.toml"), "registry_file = \"examples.toml\"\n").unwrap();
}

/// A `fhegen` command pointed at `root`.
pub fn fhegen(root: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("fhegen").unwrap();
    cmd.arg("--root").arg(root).env_remove("FHEGEN_ROOT");
    cmd
}
