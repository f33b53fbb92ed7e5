pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Смонтировать страницу каталога в `<body>`
#[wasm_bindgen]
pub fn hydrate() {
    // Ошибки загрузки коллекций пишутся через `log` в консоль браузера
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
