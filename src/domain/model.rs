use std::cell::RefCell;
use std::rc::Rc;

/// 同一個實體的多個名稱（別名），透過任一名稱修改都看得到
pub type SharedRecord = Rc<RefCell<Record>>;

/// 有名稱與價格兩個可變欄位的資料持有者
#[derive(Debug, PartialEq, Eq)]
pub struct Record {
    name: String,
    price: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: i64) {
        self.price = price;
    }

    /// 逐欄位建立新的實體，與原本不共用任何可變狀態
    pub fn duplicate(&self) -> Self {
        Self {
            name: self.name.clone(),
            price: self.price,
        }
    }

    /// 轉成可被多個名稱共用的實體
    pub fn into_shared(self) -> SharedRecord {
        Rc::new(RefCell::new(self))
    }

    /// 比較兩個值是否為同一個實體，而不是比較欄位內容
    pub fn same_identity(a: &Record, b: &Record) -> bool {
        std::ptr::eq(a, b)
    }
}

impl Clone for Record {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}
