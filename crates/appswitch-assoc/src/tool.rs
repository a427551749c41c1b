//! Association tool definition
//!
//! Describes the external file-association utility: its executable name,
//! the Homebrew prefixes it is commonly installed under, the invocation
//! shape for setting a handler and how to install it.

use std::fmt;

/// Definition of the external file-association tool
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Executable name (e.g. "duti")
    pub command: &'static str,

    /// Human-readable name used in messages (e.g. "Duti")
    pub name: &'static str,

    /// Description of what the tool does
    pub description: &'static str,

    /// Directories checked, in order, after the bare command name
    pub install_dirs: &'static [&'static str],

    /// Flag that prints the tool's version
    pub version_flag: &'static str,

    /// Role scope passed when setting a handler ("all" = open/view/edit)
    pub role_scope: &'static str,

    /// How to install the tool
    pub install_instructions: &'static [InstallInstruction],

    /// Official documentation URL
    pub docs_url: &'static str,
}

/// Installation instruction for the tool
#[derive(Debug, Clone)]
pub struct InstallInstruction {
    /// Package manager name (e.g. "Homebrew")
    pub package_manager: &'static str,
    /// The installation command
    pub command: &'static str,
}

/// duti, the macOS command-line tool for default application handlers
pub static DUTI: ToolSpec = ToolSpec {
    command: "duti",
    name: "Duti",
    description: "Sets default applications for document types and URL schemes on macOS",
    install_dirs: &["/opt/homebrew/bin", "/usr/local/bin"],
    version_flag: "-V",
    role_scope: "all",
    install_instructions: &[InstallInstruction {
        package_manager: "Homebrew",
        command: "brew install duti",
    }],
    docs_url: "https://github.com/moretension/duti",
};

/// One strategy for detecting whether the tool is installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// `which <tool>` against the executable search path
    SearchPath,
    /// `test -f <dir>/<tool>` for a fixed install location
    InstallDir(&'static str),
    /// `sh -c "command -v <tool>"`
    CommandExists,
}

impl Probe {
    /// Program and arguments that implement this probe
    pub fn invocation(&self, tool: &ToolSpec) -> (String, Vec<String>) {
        match self {
            Self::SearchPath => ("which".to_string(), vec![tool.command.to_string()]),
            Self::InstallDir(dir) => (
                "test".to_string(),
                vec!["-f".to_string(), format!("{}/{}", dir, tool.command)],
            ),
            Self::CommandExists => (
                "sh".to_string(),
                vec!["-c".to_string(), format!("command -v {}", tool.command)],
            ),
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchPath => write!(f, "search path"),
            Self::InstallDir(dir) => write!(f, "{}", dir),
            Self::CommandExists => write!(f, "command -v"),
        }
    }
}

impl ToolSpec {
    /// Locations tried when invoking the tool: the bare command name
    /// (resolved via PATH) followed by each install directory
    pub fn candidate_paths(&self) -> Vec<String> {
        std::iter::once(self.command.to_string())
            .chain(
                self.install_dirs
                    .iter()
                    .map(|dir| format!("{}/{}", dir, self.command)),
            )
            .collect()
    }

    /// Detection probes in the order they are tried
    pub fn probes(&self) -> Vec<Probe> {
        std::iter::once(Probe::SearchPath)
            .chain(self.install_dirs.iter().copied().map(Probe::InstallDir))
            .chain(std::iter::once(Probe::CommandExists))
            .collect()
    }

    /// Arguments that make `bundle_id` the handler for `extension`
    pub fn association_args(&self, bundle_id: &str, extension: &str) -> Vec<String> {
        vec![
            "-s".to_string(),
            bundle_id.to_string(),
            extension.to_string(),
            self.role_scope.to_string(),
        ]
    }

    /// Headline shown when the tool cannot be found
    pub fn not_installed_message(&self) -> String {
        match self.install_instructions.first() {
            Some(inst) => format!(
                "{} is not installed. Install it with: {}",
                self.name, inst.command
            ),
            None => format!("{} is not installed", self.name),
        }
    }

    /// Install guidance shown as detail text
    pub fn install_hint(&self) -> String {
        match self.install_instructions.first() {
            Some(inst) => format!(
                "Install {} with {}: {}",
                self.command, inst.package_manager, inst.command
            ),
            None => format!("See {} for installation instructions", self.docs_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_paths_order() {
        assert_eq!(
            DUTI.candidate_paths(),
            vec!["duti", "/opt/homebrew/bin/duti", "/usr/local/bin/duti"]
        );
    }

    #[test]
    fn test_probe_order_and_invocations() {
        let probes = DUTI.probes();
        assert_eq!(
            probes,
            vec![
                Probe::SearchPath,
                Probe::InstallDir("/opt/homebrew/bin"),
                Probe::InstallDir("/usr/local/bin"),
                Probe::CommandExists,
            ]
        );

        let invocations: Vec<_> = probes.iter().map(|p| p.invocation(&DUTI)).collect();
        assert_eq!(invocations[0], ("which".to_string(), vec!["duti".to_string()]));
        assert_eq!(
            invocations[1],
            (
                "test".to_string(),
                vec!["-f".to_string(), "/opt/homebrew/bin/duti".to_string()]
            )
        );
        assert_eq!(
            invocations[3],
            (
                "sh".to_string(),
                vec!["-c".to_string(), "command -v duti".to_string()]
            )
        );
    }

    #[test]
    fn test_association_args() {
        assert_eq!(
            DUTI.association_args("com.test.app", ".rs"),
            vec!["-s", "com.test.app", ".rs", "all"]
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DUTI.not_installed_message(),
            "Duti is not installed. Install it with: brew install duti"
        );
        assert_eq!(
            DUTI.install_hint(),
            "Install duti with Homebrew: brew install duti"
        );
    }
}
