pub const UI_UPDATE_CHANNEL_CAPACITY: usize = 64;
