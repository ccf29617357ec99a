//! Deployment script synthesis.
//!
//! Generated projects ship a single `deploy/deploy.ts` hardhat-deploy script
//! with one deploy step per contract, in registry order. Each step's log key
//! is the contract identifier itself, so deployment output lines up with the
//! generated filenames.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::naming::camel_case;

/// How the script's `tags` array is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployTags {
    /// Single-example project: tags are the identifiers alone.
    Single,
    /// Category project: `"all"` first, then every identifier.
    All,
}

/// Render the deployment script for an ordered list of contract identifiers.
#[must_use]
pub fn render_deploy_script(identifiers: &[String], tags: DeployTags) -> String {
    let mut out = String::new();
    out.push_str("import { DeployFunction } from \"hardhat-deploy/types\";\n");
    out.push_str("import { HardhatRuntimeEnvironment } from \"hardhat/types\";\n\n");
    out.push_str("const func: DeployFunction = async function (hre: HardhatRuntimeEnvironment) {\n");
    out.push_str("  const { deployer } = await hre.getNamedAccounts();\n");
    out.push_str("  const { deploy } = hre.deployments;\n");

    for ident in identifiers {
        out.push_str(&format!(
            "\n  const deployed{ident} = await deploy(\"{ident}\", {{\n    from: deployer,\n    log: true,\n  }});\n  console.log(`{ident} contract: `, deployed{ident}.address);\n"
        ));
    }

    out.push_str("};\nexport default func;\n");

    let func_id = identifiers
        .first()
        .map_or_else(|| "deploy".to_string(), |first| {
            format!("deploy_{}", camel_case(first))
        });
    out.push_str(&format!("func.id = \"{func_id}\";\n"));

    let mut tag_list: Vec<String> = Vec::new();
    if tags == DeployTags::All {
        tag_list.push("all".to_string());
    }
    tag_list.extend(identifiers.iter().cloned());
    let quoted: Vec<String> = tag_list.iter().map(|t| format!("\"{t}\"")).collect();
    out.push_str(&format!("func.tags = [{}];\n", quoted.join(", ")));
    out
}

/// Write the deployment script into `<project>/deploy/deploy.ts`.
///
/// # Errors
///
/// Propagates I/O errors from creating the directory or writing the file.
pub fn write_deploy_script(project: &Path, identifiers: &[String], tags: DeployTags) -> Result<()> {
    let deploy_dir = project.join("deploy");
    fs::create_dir_all(&deploy_dir)?;
    debug!(count = identifiers.len(), "writing deploy script");
    fs::write(deploy_dir.join("deploy.ts"), render_deploy_script(identifiers, tags))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_identifier_in_order() {
        let script = render_deploy_script(
            &["FHECounter".to_string(), "FHEAdd".to_string()],
            DeployTags::All,
        );
        let counter_at = script.find("deploy(\"FHECounter\"").unwrap();
        let add_at = script.find("deploy(\"FHEAdd\"").unwrap();
        assert!(counter_at < add_at);
        assert_eq!(script.matches("await deploy(").count(), 2);
    }

    #[test]
    fn log_key_is_the_identifier() {
        let script = render_deploy_script(&["FHECounter".to_string()], DeployTags::Single);
        assert!(script.contains("console.log(`FHECounter contract: `"));
    }

    #[test]
    fn single_tags_omit_all() {
        let script = render_deploy_script(&["FHECounter".to_string()], DeployTags::Single);
        assert!(script.contains("func.tags = [\"FHECounter\"];"));
        assert!(script.contains("func.id = \"deploy_fHECounter\";"));
    }

    #[test]
    fn category_tags_lead_with_all() {
        let script = render_deploy_script(
            &["FHECounter".to_string(), "FHEAdd".to_string()],
            DeployTags::All,
        );
        assert!(script.contains("func.tags = [\"all\", \"FHECounter\", \"FHEAdd\"];"));
    }

    #[test]
    fn writes_into_deploy_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_deploy_script(dir.path(), &["C".to_string()], DeployTags::Single).unwrap();
        let script = fs::read_to_string(dir.path().join("deploy/deploy.ts")).unwrap();
        assert!(script.contains("deploy(\"C\""));
    }
}
