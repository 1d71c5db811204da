use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CacheMount, ExecutionEnvironment};

/// Execution environment double with scripted operator answers.
///
/// Like a caching environment, a key that was mounted before keeps its
/// recorded answer and the interactive step is skipped, even after the
/// mount was released.
#[derive(Default)]
pub struct FakeEnvironment {
    /// `None` simulates an operator interrupt before answering.
    answers: Mutex<VecDeque<Option<String>>>,
    recorded: Mutex<HashMap<String, String>>,
    mounted_keys: Mutex<Vec<String>>,
    released_keys: Mutex<Vec<String>>,
    interactive_commands: Mutex<Vec<Vec<String>>>,
    captured_commands: Mutex<Vec<Vec<String>>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(self, answer: &str) -> Self {
        self.answers.lock().unwrap().push_back(Some(answer.to_string()));
        self
    }

    pub fn with_interrupt(self) -> Self {
        self.answers.lock().unwrap().push_back(None);
        self
    }

    pub fn mounted_keys(&self) -> Vec<String> {
        self.mounted_keys.lock().unwrap().clone()
    }

    pub fn released_keys(&self) -> Vec<String> {
        self.released_keys.lock().unwrap().clone()
    }

    pub fn interactive_commands(&self) -> Vec<Vec<String>> {
        self.interactive_commands.lock().unwrap().clone()
    }

    pub fn captured_commands(&self) -> Vec<Vec<String>> {
        self.captured_commands.lock().unwrap().clone()
    }
}

impl ExecutionEnvironment for FakeEnvironment {
    fn mount_cache(&self, key: &str) -> Result<CacheMount, AppError> {
        self.mounted_keys.lock().unwrap().push(key.to_string());
        Ok(CacheMount {
            key: key.to_string(),
            path: PathBuf::from("/cache").join(key),
            handle: key.to_string(),
        })
    }

    fn run(&self, mount: &CacheMount, argv: &[String]) -> Result<String, AppError> {
        self.captured_commands.lock().unwrap().push(argv.to_vec());
        if argv.first().map(String::as_str) != Some("cat") {
            return Ok(String::new());
        }
        self.recorded.lock().unwrap().get(&mount.key).cloned().ok_or_else(|| {
            let path = mount.answer_path();
            AppError::environment("run", format!("cat: {}: No such file", path.display()))
        })
    }

    fn run_interactive(&self, mount: &CacheMount, argv: &[String]) -> Result<(), AppError> {
        if self.recorded.lock().unwrap().contains_key(&mount.key) {
            return Ok(());
        }
        self.interactive_commands.lock().unwrap().push(argv.to_vec());

        let next = self.answers.lock().unwrap().pop_front();
        match next {
            Some(Some(answer)) => {
                self.recorded.lock().unwrap().insert(mount.key.clone(), answer);
                Ok(())
            }
            Some(None) => Ok(()),
            None => Err(AppError::environment("run_interactive", "no scripted answer left")),
        }
    }

    fn release_cache(&self, mount: &CacheMount) -> Result<(), AppError> {
        self.released_keys.lock().unwrap().push(mount.key.clone());
        Ok(())
    }
}
