fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rerun-if-changed=resources/windows/resources.rc");
        println!("cargo:rerun-if-changed=resources/windows/tray.ico");
        // Embed the Windows resource file (tray icon, resource ID 1)
        let _ = embed_resource::compile("resources/windows/resources.rc", embed_resource::NONE);
    }
}
