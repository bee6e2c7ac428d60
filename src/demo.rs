//! 开发用示例分组 `test`
//!
//! ```text
//! cmdroute test/mult --left=3 --right=4
//! cmdroute test/out --text="hi" --repeat=2
//! ```

use tokio::io::AsyncWriteExt;

use crate::handler::{Arguments, HandlerResult};
use crate::metadata::{EntryPointSpec, FormalParameter, GroupSpec, ParameterDecl, ValueType};

pub fn register() -> GroupSpec {
    GroupSpec::new("test", "For development purposes")
        .entry_point(
            EntryPointSpec::new("mult", "Multiply two numbers")
                .parameter(ParameterDecl::required("left", "First number"))
                .parameter(ParameterDecl::required("right", "Second number"))
                .formal(FormalParameter::new("left", ValueType::Float))
                .formal(FormalParameter::new("right", ValueType::Float))
                .sync_handler(multiply),
        )
        .entry_point(
            EntryPointSpec::new("out", "Output text")
                .parameter(ParameterDecl::required("text", "Text to output"))
                .parameter(ParameterDecl::optional(
                    "repeat",
                    "How many times to repeat the text.",
                ))
                .formal(FormalParameter::new("text", ValueType::String))
                .formal(FormalParameter::new("repeat", ValueType::Int).with_default(3))
                .async_handler(output),
        )
}

fn multiply(args: Arguments) -> HandlerResult {
    let left: f64 = args.get("left")?;
    let right: f64 = args.get("right")?;
    println!("\n {} x {} = {}\n", left, right, left * right);
    Ok(())
}

async fn output(args: Arguments) -> HandlerResult {
    let text: String = args.get("text")?;
    let repeat: i64 = args.get("repeat")?;
    if repeat < 0 {
        crate::app_bail!("repeat must not be negative: {}", repeat);
    }

    let mut stdout = tokio::io::stdout();
    for _ in 0..repeat {
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
