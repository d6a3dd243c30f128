use loadprobe::error::AppResult;

fn main() -> AppResult<()> {
    loadprobe::entry::run()
}
