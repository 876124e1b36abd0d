macro_rules! impl_getter {
    ($name:ident() -> &$type:ty) => {
        pub fn $name(&self) -> &$type {
            &self.$name
        }
    };
    ($name:ident() -> $type:ty) => {
        pub fn $name(&self) -> $type {
            self.$name
        }
    };
}

macro_rules! impl_setter {
    ($set_name:ident($name:ident: $type:ty)) => {
        pub fn $set_name(&mut self, $name: $type) {
            self.$name = $name;
        }
    };
}
