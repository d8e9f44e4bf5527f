use fs_navigator::{Config, HostFS, Navigator};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let tmp = std::env::temp_dir();
    println!("Temp dir: {}", tmp.display());

    // start inside the temp dir instead of the process working directory
    let config = Config::from_process()?.with_start_dir(tmp.to_string_lossy());
    let mut nav = Navigator::new(HostFS::new(), &config)?;

    // creates `<tmp>/my_nav/docs` and moves the pointer there
    nav.create_and_enter_directory("my_nav/docs")?;
    nav.create_file("first.txt", "Hello", true)?;
    nav.create_directory("drafts")?;

    for entry in nav.directory_contents()? {
        println!("{entry}");
    }

    // back to `<tmp>/my_nav/`
    nav.go_up()?;
    println!("Now in {}", nav.current_directory());

    std::fs::remove_dir_all(tmp.join("my_nav"))?;
    Ok(())
}
