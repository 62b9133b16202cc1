mod about;
mod contact;
mod dom;
mod gallery;
mod nav;
mod page;
mod page_config;
mod reveal;
mod scroll;
mod tilt;
mod year;

fn main() {
    console_error_panic_hook::set_once();
    page::start();
}
