use ordarr::{ArrayError, OrderedArray};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action<T> {
    Insert(T),
    Delete(T),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct History<T> {
    past: Vec<Action<T>>,
    future: Vec<Action<T>>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
        }
    }
}

impl<T: Ord + Clone> History<T> {
    pub fn frwd(&mut self, a: Action<T>) {
        self.past.push(a);
        self.future.clear();
    }

    /// Replays the most recently undone action. Returns false if the array
    /// was left unchanged.
    pub fn redo(&mut self, array: &mut OrderedArray<T>) -> Result<bool, ArrayError> {
        let action = match self.future.pop() {
            Some(a) => a,
            None => return Ok(false),
        };
        let res = match &action {
            Action::Insert(v) => array.insert(v.clone()).map(|_| true),
            Action::Delete(v) => Ok(delete_recorded(array, v)),
        };
        match res {
            Ok(changed) => {
                self.past.push(action);
                Ok(changed)
            }
            Err(e) => {
                self.future.push(action);
                Err(e)
            }
        }
    }

    /// Reverts the most recent action. Returns false if the array was left
    /// unchanged.
    pub fn undo(&mut self, array: &mut OrderedArray<T>) -> Result<bool, ArrayError> {
        let action = match self.past.pop() {
            Some(a) => a,
            None => return Ok(false),
        };
        let res = match &action {
            Action::Insert(v) => Ok(delete_recorded(array, v)),
            Action::Delete(v) => array.insert(v.clone()).map(|_| true),
        };
        match res {
            Ok(changed) => {
                self.future.push(action);
                Ok(changed)
            }
            Err(e) => {
                self.past.push(action);
                Err(e)
            }
        }
    }
}

fn delete_recorded<T: Ord>(array: &mut OrderedArray<T>, v: &T) -> bool {
    let deleted = array.delete(v);
    if !deleted {
        tracing::warn!("history is out of step with the array: recorded item is missing");
    }
    deleted
}
