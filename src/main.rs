//! vs - open folders and files in VS Code by alias
//!
//! This is the binary entry point. All logic lives in the library.

#[tokio::main]
async fn main() {
    let code = vs_alias::run(std::env::args_os()).await;
    std::process::exit(code);
}
