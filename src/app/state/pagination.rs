#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub batch_size: u32,
    pub last_batch_size: u32,
}

impl Pagination {
    pub fn new(batch_size: u32) -> Self {
        Self {
            current_page: 0,
            batch_size,
            last_batch_size: 0,
        }
    }

    // Pages are 1-based, the first call yields page 1
    pub fn advance(&mut self) -> u32 {
        self.current_page += 1;
        self.current_page
    }

    pub fn is_next_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn set_loaded_count(&mut self, loaded_count: usize) {
        self.last_batch_size = loaded_count as u32;
    }

    // A full batch means there may be more, there's no other hint from the API
    pub fn has_more(&self) -> bool {
        self.last_batch_size == self.batch_size
    }

    pub fn reset(&mut self) {
        self.current_page = 0;
    }
}
