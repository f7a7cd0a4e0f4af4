// Counters
pub const COUNTER_MIN: i32 = 0;
pub const COUNTER_MAX: i32 = 100;

// Evidence collection: clean chance = BASE - PER_DIFFICULTY * difficulty
pub const CLEAN_ACQUISITION_BASE: f64 = 1.05;
pub const CLEAN_ACQUISITION_PER_DIFFICULTY: f64 = 0.08;
pub const CLEAN_ACQUISITION_MIN: f64 = 0.15;
pub const CLEAN_ACQUISITION_MAX: f64 = 0.95;
// Exposure from collection: risk * (BASE + difficulty / DIVISOR)
pub const ACQUISITION_RISK_BASE: f64 = 1.2;
pub const ACQUISITION_RISK_DIFFICULTY_DIVISOR: f64 = 4.0;
pub const MESSY_ACQUISITION_MULTIPLIER: f64 = 1.5;

// Report submission
pub const MAX_EVIDENCE_PER_REPORT: usize = 3;
pub const REPORT_FEAR_FACTOR: f64 = 0.6;
pub const REPORT_PRESSURE_FACTOR: f64 = 0.4;
pub const REPORT_PRESSURE_BACKLASH: i32 = 3;
pub const REPORT_RISK_FACTOR: f64 = 0.8;
pub const ANONYMOUS_RISK_FACTOR: f64 = 0.3;
pub const IDENTIFIED_RISK_FACTOR: f64 = 0.7;
pub const FORCED_IDENTITY_RISK_FACTOR: f64 = 1.0;
pub const SUCCESS_MODIFIER_MIN: i32 = -90;
pub const SUCCESS_MODIFIER_MAX: i32 = 100;

// Passive drift when waiting
pub const WAIT_PRESSURE_DRIFT: i32 = -1;
pub const WAIT_FEAR_DRIFT: i32 = -1;
pub const WAIT_RISK_DRIFT: i32 = -3;

// Replies
pub const REPLY_JITTER_DAYS: u32 = 3;
pub const REPLY_POWER_SCALE_BASE: f64 = 0.5;
pub const REPLY_POWER_SCALE_DIVISOR: f64 = 20.0;

// Random events: chance = BASE + difficulty bonus + exposure / DIVISOR
pub const EVENT_BASE_CHANCE: f64 = 0.15;
pub const EVENT_RISK_DIVISOR: f64 = 400.0;
pub const HARD_EVENT_CHANCE_BONUS: f64 = 0.05;

// Endings
pub const SUCCESS_THRESHOLD: i32 = 80;
pub const REDIRECT_FEAR_GUARD: i32 = 70;
pub const PYRRHIC_RISK_THRESHOLD: i32 = 60;
pub const PYRRHIC_COST_THRESHOLD: f64 = 20.0;
pub const HARD_MODE_COST_CAP: f64 = 50.0;
pub const FULL_CREDIT_REPLIES: usize = 3;

// Per-difficulty session length
pub const EASY_MAX_DAY: u32 = 60;
pub const MEDIUM_MAX_DAY: u32 = 45;
pub const HARD_MAX_DAY: u32 = 35;
pub const CLASS_ENDING_WARNING_DAYS: u32 = 5;

// Achievements
pub const LOW_COST_VICTORY_LIMIT: f64 = 10.0;
pub const SPEED_RUN_DAY_LIMIT: u32 = 10;
pub const HIGH_RISK_THRESHOLD: i32 = 80;
pub const SOCIAL_MEDIA_STAR_USES: usize = 3;
pub const PERFECT_VICTORY_REPORTS: usize = 1;
pub const PERSISTENT_FIGHTER_REPORTS: usize = 3;
pub const HARDCORE_CHAMPION_REPORTS: usize = 9;

// Status text buckets
pub const STATUS_MEDIUM_FROM: i32 = 25;
pub const STATUS_HIGH_FROM: i32 = 50;
pub const STATUS_CRITICAL_FROM: i32 = 75;
