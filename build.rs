const COMMANDS: &[&str] = &["share_file"];

fn main() {
  tauri_plugin::Builder::new(COMMANDS).build();
}
