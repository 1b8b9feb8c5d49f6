//! Fixed Bengali sentence pools.
//!
//! Order matters: picks are indices into these arrays.

/// Opening sentence of each summary.
pub const LEAD: [&str; 5] = [
    "আজ আপনার সৃজনশীল শক্তি জাগ্রত হবে। নতুন কাজের সুযোগ আসবে।",
    "আজ ধৈর্য ও বিচক্ষণতা কাজে দেবে—একটু সাবধান থাকুন।",
    "আজ আপনার মন কর্মে একাগ্র থাকবে; নতুন সিদ্ধান্তে সাফল্য মিলবে।",
    "আজ যোগাযোগ বৃদ্ধি পাবে—মিথস্ক্রিয়া ফলদায়ক হবে।",
    "আজ আত্মবিশ্লেষণ ও শৃঙ্খলা বিশেষ ফল দেবে।",
];

pub const HEALTH: [&str; 4] = [
    "গলা বা হজমে হালকা সমস্যা হতে পারে—হালকা খাবার খান।",
    "চোখ ও মাথায় ক্লান্তি এড়াতে বিশ্রাম নিন।",
    "হালকা ব্যায়াম বা হাঁটা স্বাস্থ্য ভালো রাখবে।",
    "বিশ্রাম ও পর্যাপ্ত পানি গ্রহণ রাখুন।",
];

pub const ADVICE: [&str; 4] = [
    "অপ্রয়োজনীয় খরচ এড়ান।",
    "পরিবারের সঙ্গে সময় কাটান।",
    "নতুন পরিকল্পনা লিখে রাখুন।",
    "ধ্যান ও গভীর শ্বাস মন শান্ত করবে।",
];
