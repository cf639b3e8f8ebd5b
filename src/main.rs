use lunaris_site::{config, App};

fn main() {
    console_error_panic_hook::set_once();
    let level = config::log_level(cfg!(debug_assertions));
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
