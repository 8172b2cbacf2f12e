use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct QuipuConfig {
    pub port: u16,
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl QuipuConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(8080);

        let data_dir =
            PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()));

        let assets_dir =
            PathBuf::from(std::env::var("ASSETS_DIR").unwrap_or_else(|_| "./assets".to_string()));

        let templates_dir = PathBuf::from(
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "./templates".to_string()),
        );

        Self {
            port,
            data_dir,
            assets_dir,
            templates_dir,
        }
    }
}
