use macroquad::window::Conf;

use client::config::Config;

fn window_conf() -> Conf {
    let config = Config::from_env().unwrap_or_default();
    let (window_width, window_height) = config.window_size();

    Conf {
        window_title: "Light Up".to_string(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    client::run::run().await;
}
