fn main() -> miette::Result<()> {
    snapshot_testing::cli::run()
}
