//! Special message providers
//!
//! The loop treats the special message as an opaque pure function of the
//! arguments. Anything implementing [`SpecialMessage`] can be plugged in,
//! including plain closures.

/// Produces the text printed by the `sm` command
pub trait SpecialMessage {
    /// Build the message for the given arguments
    fn special_message(&self, args: &[String]) -> String;
}

impl<F> SpecialMessage for F
where
    F: Fn(&[String]) -> String,
{
    fn special_message(&self, args: &[String]) -> String {
        self(args)
    }
}

/// Provider used by the `psh` binary
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessage;

impl SpecialMessage for DefaultMessage {
    fn special_message(&self, args: &[String]) -> String {
        if args.is_empty() {
            return "Nothing special to say.".to_string();
        }
        format!("*** {} ***", args.join(" "))
    }
}
