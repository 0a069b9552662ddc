use ccfilter::{logging, run};

fn main() {
    // Reset SIGPIPE to default behavior so `ccfilter | head` exits quietly
    // once the reader goes away
    #[cfg(unix)]
    reset_sigpipe();

    logging::init();

    if let Err(e) = run(std::env::args_os()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
