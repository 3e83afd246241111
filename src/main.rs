#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(target_os = "none")]
#[unsafe(no_mangle)]
fn _start() {
    rvsm::boot(&rvsm::platform::HARTS);
    loop {
        core::hint::spin_loop();
    }
}

// Hosted builds only exist to build and test the workspace, there is nothing to boot.
#[cfg(not(target_os = "none"))]
fn main() {}

// ————————————————————————————— Panic Handler —————————————————————————————— //

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    log::error!("{info}");
    loop {
        core::hint::spin_loop();
    }
}
