use std::ffi::{CStr, CString};
use std::ptr;
use crate::error::ExecError;
use crate::tokenizer::{self, SPACE};

/// Argument vector handed to `execvp`. The first element is the program
/// name, looked up through `PATH`. Never empty.
#[derive(Debug)]
pub struct Argv {
    args: Vec<CString>,
    // NULL-terminated pointers into `args`, built before any fork.
    ptrs: Vec<*const libc::c_char>,
}

impl Argv {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ExecError> {
        if tokens.is_empty() {
            return Err(ExecError::EmptyCommand);
        }
        let args = tokens
            .iter()
            .map(|t| {
                CString::new(t.as_ref())
                    .map_err(|_| ExecError::InvalidArgument(format!("{:?} contains a NUL byte", t.as_ref())))
            })
            .collect::<Result<Vec<CString>, _>>()?;
        let ptrs = args
            .iter()
            .map(|a| a.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();
        Ok(Argv { args, ptrs })
    }

    /// Tokenizes one pipeline stage on spaces.
    pub fn from_stage(stage: &str) -> Result<Self, ExecError> {
        Self::new(&tokenizer::tokenize(stage, SPACE))
    }

    pub fn program(&self) -> &CStr {
        &self.args[0]
    }

    pub fn args(&self) -> &[CString] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// `argv` in the layout `execvp(3)` expects. Valid while `self` lives.
    pub fn as_ptr(&self) -> *const *const libc::c_char {
        self.ptrs.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_is_first_token() {
        let argv = Argv::new(&["echo", "hello", "world"]).unwrap();
        assert_eq!(argv.program().to_str().unwrap(), "echo");
        assert_eq!(argv.len(), 3);
        assert_eq!(argv.args()[2].to_str().unwrap(), "world");
    }

    #[test]
    fn test_empty_tokens_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(Argv::new(&empty), Err(ExecError::EmptyCommand)));
        assert!(matches!(Argv::from_stage("   "), Err(ExecError::EmptyCommand)));
    }

    #[test]
    fn test_nul_byte_rejected() {
        assert!(matches!(Argv::new(&["ec\0ho"]), Err(ExecError::InvalidArgument(_))));
    }

    #[test]
    fn test_no_argument_limit() {
        let tokens: Vec<String> = (0..500).map(|i| format!("arg{}", i)).collect();
        let argv = Argv::new(&tokens).unwrap();
        assert_eq!(argv.len(), 500);
    }

    #[test]
    fn test_pointer_array_is_null_terminated() {
        let argv = Argv::new(&["ls", "-l"]).unwrap();
        let ptrs = unsafe { std::slice::from_raw_parts(argv.as_ptr(), 3) };
        assert_eq!(ptrs[0], argv.program().as_ptr());
        assert_eq!(unsafe { CStr::from_ptr(ptrs[1]) }.to_str().unwrap(), "-l");
        assert!(ptrs[2].is_null());
    }

    #[test]
    fn test_from_stage() {
        let argv = Argv::from_stage(" grep  -i keyword ").unwrap();
        let args: Vec<&str> = argv.args().iter().map(|a| a.to_str().unwrap()).collect();
        assert_eq!(args, vec!["grep", "-i", "keyword"]);
    }
}
