// слоги хангыль (U+AC00..U+D7A3) декомпозируются и комбинируются алгоритмически:
//  - L - ведущие согласные чамо, U+1100..=U+1112
//  - V - гласные чамо, U+1161..=U+1175
//  - T - завершающие согласные чамо, U+11A8..=U+11C2
// слог LV = S_BASE + (L * V_COUNT + V) * T_COUNT, слог LVT = LV + T

/// начало блока слогов хангыль
pub const S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо
pub const L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
pub const V_BASE: u32 = 0x1161;
/// кодпоинт, предшествующий блоку завершающих согласных (T = 0 - завершающей согласной нет)
pub const T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const L_COUNT: u32 = 19;
/// количество гласных
pub const V_COUNT: u32 = 21;
/// количество завершающих согласных + 1 (её отсутствие)
pub const T_COUNT: u32 = 28;
/// количество гласных * количество вариантов завершающих согласных
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// количество слогов хангыль в Unicode
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// является-ли кодпоинт слогом хангыль
#[inline]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// может-ли кодпоинт оказаться вторым в паре композиции хангыль (V или T)
#[inline]
pub fn is_trailing_jamo(code: u32) -> bool
{
    (V_BASE .. T_BASE + T_COUNT).contains(&code)
}

/// разбор слога на чамо (L, V, T), T отсутствует у слогов LV
#[inline]
pub fn decompose_syllable(code: u32) -> Option<(u32, u32, Option<u32>)>
{
    if !is_syllable(code) {
        return None;
    }

    let si = code - S_BASE;

    let l = L_BASE + si / N_COUNT;
    let v = V_BASE + (si % N_COUNT) / T_COUNT;
    let t = T_BASE + si % T_COUNT;

    Some((l, v, (t != T_BASE).then_some(t)))
}

/// сборка слога из чамо
/// любой компонент вне своего диапазона - композиции нет (в т.ч. T, вместо того, чтобы
/// молча получить слог LV)
#[inline]
pub fn compose_syllable(l: u32, v: u32, t: Option<u32>) -> Option<u32>
{
    let li = l.wrapping_sub(L_BASE);
    let vi = v.wrapping_sub(V_BASE);

    if li >= L_COUNT || vi >= V_COUNT {
        return None;
    }

    let ti = match t {
        Some(t) => match t.wrapping_sub(T_BASE) {
            ti if ti != 0 && ti < T_COUNT => ti,
            _ => return None,
        },
        None => 0,
    };

    Some(S_BASE + (li * V_COUNT + vi) * T_COUNT + ti)
}
