/// Application settings.
pub struct AppConfig {
    pub name: String,
}

pub fn start(config: AppConfig) {
}

fn internal() -> u8 {
    0
}
