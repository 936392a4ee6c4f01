use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON document store.
    pub database: String,
    /// Notes column in `list`: "Short" (truncated), "Full", or "None".
    #[serde(default = "default_show_notes")]
    pub show_notes: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_show_notes() -> String {
    "Short".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            show_notes: default_show_notes(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".runlogger")
        } else {
            PathBuf::from(".runlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("runlogger.conf")
    }

    /// Return the full path of the document store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("running_logs.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        eprintln!("⚠️ Failed to parse configuration file: {}", e);
                        Config::default()
                    }
                },
                Err(e) => {
                    eprintln!("⚠️ Failed to read configuration file: {}", e);
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        // Store path: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("running_logs.json")
        };

        // Test mode touches nothing under the home directory.
        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                show_notes: default_show_notes(),
                separator_char: default_separator_char(),
            };

            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
