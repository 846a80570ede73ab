use crate::cli::{Cli, Command};
use crate::error::AppError;
use handle_check_range::run_check_range;
use handle_cidr::run_cidr;
use handle_next::run_next;
use handle_overlap::run_overlap;

pub mod handle_check_range;
pub mod handle_cidr;
pub mod handle_next;
pub mod handle_overlap;

/// アプリケーションのメインロジック
pub async fn run(args: &Cli) -> Result<(), AppError> {
    if args.min_prefix > args.max_prefix {
        return Err(AppError::InvalidInput(format!(
            "--min-prefix {} is greater than --max-prefix {}",
            args.min_prefix, args.max_prefix
        )));
    }

    match &args.command {
        Command::Next {
            start,
            end,
            allocated,
            strict,
        } => run_next(args, start, end, allocated, *strict).await,
        Command::Cidr { cidr } => run_cidr(args, cidr).await,
        Command::CheckRange {
            start,
            end,
            gateway,
            prefix_len,
        } => run_check_range(args, start, end, gateway, *prefix_len).await,
        Command::Overlap {
            start1,
            end1,
            start2,
            end2,
        } => {
            run_overlap(
                args,
                (start1.as_str(), end1.as_str()),
                (start2.as_str(), end2.as_str()),
            )
            .await
        }
    }
}
