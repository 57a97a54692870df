fn main() {
    dioxus::launch(playground_web::App);
}
