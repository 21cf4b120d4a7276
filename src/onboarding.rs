use crate::config::KEY_ENV_VAR;

pub const USAGE: &str = "usage: q desired command text";

const RULE: &str = "======================================================";

/// Which shell syntax the setup instructions are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Posix,
    PowerShell,
}

impl Shell {
    pub fn current() -> Self {
        if cfg!(windows) {
            Shell::PowerShell
        } else {
            Shell::Posix
        }
    }

    fn export_line(self) -> String {
        match self {
            Shell::Posix => format!("  export {KEY_ENV_VAR}=\"[insert key here]\""),
            Shell::PowerShell => format!("  $env:{KEY_ENV_VAR} = \"[insert key here]\""),
        }
    }

    fn profile(self) -> &'static str {
        match self {
            Shell::Posix => ".zshrc or\n.bashrc",
            Shell::PowerShell => "$profile",
        }
    }

    fn install_lines(self, exe: &str) -> Vec<String> {
        match self {
            Shell::Posix => vec![
                "  mkdir -p ~/CustomBin/bin".to_string(),
                format!("  mv {exe} ~/CustomBin/bin/q"),
                "  export PATH=$PATH:~/CustomBin/bin".to_string(),
            ],
            Shell::PowerShell => vec![
                "  New-Item -ItemType Directory -Force ~\\CustomBin\\bin".to_string(),
                format!("  Move-Item {exe} ~\\CustomBin\\bin\\q.exe"),
                "  $env:Path += \";$HOME\\CustomBin\\bin\"".to_string(),
            ],
        }
    }
}

/// The greeting shown when no user key is configured.
///
/// `exe` is the path of the running binary, used in the instructions for
/// moving it somewhere on `PATH`.
pub fn greeting(exe: &str, shell: Shell) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "                        Hello!                        ".to_string(),
        RULE.to_string(),
        String::new(),
        format!("You're seeing this greeting because the {KEY_ENV_VAR}"),
        "environment variable is not set. Make sure to set it".to_string(),
        "to your user key with the following command:".to_string(),
        String::new(),
        shell.export_line(),
        String::new(),
        "To avoid having to do this in future terminal sessions,".to_string(),
        format!("you can also add the above line to your {}!", shell.profile()),
        String::new(),
        "I recommend putting this executable in a bin, and".to_string(),
        "renaming it to 'q' (or some other easy command). You".to_string(),
        "can do that like this:".to_string(),
        String::new(),
    ];
    lines.extend(shell.install_lines(exe));
    lines.extend([
        String::new(),
        format!("You should add that last line to your {} as well!", shell.profile()),
        String::new(),
        "(If you don't have a user key, ask whoever runs your completion service!)".to_string(),
    ]);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_env_var() {
        let text = greeting("/tmp/q", Shell::Posix);
        assert!(text.contains("SHELL_AI_KEY"));
        assert!(text.contains("export SHELL_AI_KEY=\"[insert key here]\""));
    }

    #[test]
    fn greeting_explains_how_to_install_the_binary() {
        let text = greeting("/tmp/build/q", Shell::Posix);
        assert!(text.contains("  mv /tmp/build/q ~/CustomBin/bin/q"));
        assert!(text.contains("export PATH=$PATH:~/CustomBin/bin"));
        assert!(text.contains(".bashrc"));
        assert!(!text.contains(USAGE));
    }

    #[test]
    fn powershell_greeting_uses_env_drive_and_profile() {
        let text = greeting("C:\\build\\q.exe", Shell::PowerShell);
        assert!(text.contains("$env:SHELL_AI_KEY = \"[insert key here]\""));
        assert!(text.contains("Move-Item C:\\build\\q.exe ~\\CustomBin\\bin\\q.exe"));
        assert!(text.contains("$profile"));
        assert!(!text.contains("export SHELL_AI_KEY"));
    }

    #[test]
    fn usage_line_is_exact() {
        assert_eq!(USAGE, "usage: q desired command text");
    }
}
