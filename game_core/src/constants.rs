//! Path: game_core/src/constants.rs
//! Summary: マップサイズ・プレイヤー・戦闘タイミングなどの定数定義

// Tile map size
pub const TILE_SIZE:   f32 = 32.0;
pub const MAP_TILES_X: usize = 64;
pub const MAP_TILES_Y: usize = 48;
pub const MAP_WIDTH:   f32 = TILE_SIZE * MAP_TILES_X as f32; // 2048
pub const MAP_HEIGHT:  f32 = TILE_SIZE * MAP_TILES_Y as f32; // 1536

// Player
pub const PLAYER_SIZE:        f32 = 32.0;
pub const PLAYER_MAX_HP:      f32 = 100.0;
pub const PLAYER_MAX_MANA:    f32 = 50.0;
pub const MANA_REGEN_PER_SEC: f32 = 10.0;

// Movement（トップダウン移動: 加速 + 摩擦、重力なし）
pub const PLAYER_MAX_SPEED: f32 = 400.0;
pub const PLAYER_ACCEL:     f32 = 3000.0;
/// 1/60 秒あたりの摩擦係数。dt 非依存にするため 0.8^(60*dt) で適用する
pub const FRICTION_PER_STEP: f32 = 0.8;

// Melee attack
pub const PLAYER_ATTACK_DAMAGE: f32 = 15.0;
pub const ATTACK_COOLDOWN:      f32 = 0.5;
/// 攻撃判定が有効な時間（クールダウン先頭の窓。タイマーコールバック不使用）
pub const ATTACK_WINDOW:        f32 = 0.15;
pub const ATTACK_HITBOX_WIDTH:  f32 = 100.0;
pub const ATTACK_HITBOX_HEIGHT: f32 = 80.0;

// Heavy attack（マナ消費の遠距離特殊攻撃）
pub const HEAVY_ATTACK_COOLDOWN:     f32 = 1.5;
pub const HEAVY_ATTACK_MANA_COST:    f32 = 10.0;
pub const HEAVY_ATTACK_DAMAGE_RATIO: f32 = 0.8;
pub const HEAVY_ATTACK_SPEED:        f32 = 200.0;

// Dodge / hop
pub const DODGE_COOLDOWN:     f32 = 2.0;
pub const DODGE_INVULN:       f32 = 0.5;
/// ドッジ状態はクールダウンがこの値を下回るまで継続する
pub const DODGE_ACTIVE_UNTIL: f32 = 1.5;
pub const JUMP_COOLDOWN:      f32 = 1.0;
pub const JUMP_IMPULSE:       f32 = 300.0;

// Boost multipliers
pub const SPEED_BOOST_MULT:     f32 = 1.5;
pub const DAMAGE_BOOST_MULT:    f32 = 1.5;
pub const DEFENSE_BOOST_FACTOR: f32 = 0.5;
pub const JUMP_BOOST_MULT:      f32 = 1.3;

// Combat
pub const INVINCIBLE_DURATION:    f32 = 0.5;
pub const ENEMY_AGGRO_RANGE:      f32 = 800.0;
pub const ENEMY_MELEE_COOLDOWN:   f32 = 1.0;
pub const ENEMY_RANGED_COOLDOWN:  f32 = 3.0;
pub const ENEMY_PROJECTILE_SPEED: f32 = 200.0;

// Idle wander（アグロ外の敵のふらつき移動）
pub const WANDER_SPEED_RATIO: f32 = 0.3;
pub const WANDER_MIN_PAUSE:   f32 = 0.5;
pub const WANDER_MAX_PAUSE:   f32 = 2.0;

// Projectiles
pub const PROJECTILE_SIZE:        f32 = 8.0;
pub const PROJECTILE_LIFETIME:    f32 = 3.0;
pub const PROJECTILE_CULL_MARGIN: f32 = 100.0;

// Boss phases（HP 比率のしきい値と位相 3 の扇射撃）
pub const BOSS_PHASE2_THRESHOLD:  f32 = 0.66;
pub const BOSS_PHASE3_THRESHOLD:  f32 = 0.33;
pub const BOSS_PHASE3_FAN_SPREAD: f32 = 0.3;

// Simulation step
pub const MAX_FRAME_DELTA: f32 = 0.1;
pub const FIXED_STEP:      f32 = 1.0 / 60.0;

/// ワールド RNG シード（create_world のデフォルト値）
pub const WORLD_RNG_SEED: u64 = 12345;
