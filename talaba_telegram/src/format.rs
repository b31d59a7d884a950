//! Reply texts.
//!
//! Multi-entry replies are built as blocks (header, one block per entry,
//! footer) and packed into messages that stay under Telegram's size limit
//! without cutting an entry in half.

use talaba_core::{GroupEntry, Listing, Stats, StudentRecord};

/// Maximum message length for Telegram (with margin)
pub const MAX_MESSAGE_LENGTH: usize = 4000;

const SEPARATOR: &str = "────────────────────";

pub const WELCOME: &str = "\
👋 Assalomu alaykum! 🤖
Talaba ma'lumotlari botiga xush kelibsiz!

📝 Passport ID raqamingizni yuboring, men sizga:
• 👤 To'liq ism-familiyangiz
• 🏛️ Fakultetingiz
• 📚 Guruh nomingiz
• 🔗 Guruh linkingiz

📍 Namuna: AB1234567

⚠️ Iltimos, passport ID ni to'g'ri kiriting!";

pub const HELP: &str = "\
ℹ️ Yordam:

1. /start - Botni ishga tushirish
2. Passport ID raqamingizni yuboring
3. Bot sizga to'liq ma'lumotlaringizni yuboradi

🔍 Qo'shimcha buyruqlar:
/faculty <nomi> - Fakultet bo'yicha qidirish
/group <nomi> - Guruh bo'yicha qidirish
/all - Barcha talabalar ro'yxati
/links - Barcha guruh linklari
/stats - Statistika

📍 Namuna: AB1234567

📞 Muammo bo'lsa, administrator bilan bog'laning";

pub const GUIDANCE: &str = "\
❌ Iltimos, faqat passport ID raqamingizni yuboring.
📍 Namuna: AB1234567

ℹ️ Yordam olish uchun /help buyrug'ini yuboring";

pub const FACULTY_USAGE: &str = "\
🏛️ Fakultet bo'yicha qidirish:
Namuna: /faculty Dasturiy injiniring
Yoki: /faculty Iqtisodiyot";

pub const GROUP_USAGE: &str = "\
📚 Guruh bo'yicha qidirish:
Namuna: /group DI-21-01
Yoki: /group AT-20-02";

pub const UNAVAILABLE: &str = "\
❌ Ma'lumotlar bazasida muammo yuzaga keldi. \
Iltimos, keyinroq urinib ko'ring yoki administrator bilan bog'laning.";

/// Card for a found student, followed by the group link on its own.
#[must_use]
pub fn student_found(record: &StudentRecord) -> [String; 2] {
    [
        format!(
            "✅ Ma'lumot topildi!\n\n\
             👤 To'liq ism: {}\n\
             📋 Passport ID: {}\n\
             🏛️ Fakultet: {}\n\
             📚 Guruh: {}\n\
             🔗 Guruh linki: {}",
            record.full_name,
            record.identifier,
            record.faculty,
            record.group_name,
            record.group_link
        ),
        format!(
            "📲 Guruhga o'tish uchun quyidagi linkni bosing:\n{}",
            record.group_link
        ),
    ]
}

#[must_use]
pub fn student_not_found(identifier: &str) -> String {
    format!(
        "❌ Kechirasiz, {identifier} raqamli talaba topilmadi.\n\n\
         🔍 Tekshirish uchun:\n\
         • Passport ID ni to'g'ri kiritganingizni tekshiring\n\
         • Katta-kichik harflar farqi yo'q\n\
         • Ortiqcha bo'sh joy qoldirmang\n\n\
         📞 Agar muammo davom etsa, administrator bilan bog'laning."
    )
}

#[must_use]
pub fn faculty_results(query: &str, records: &[&StudentRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![format!("❌ '{query}' fakulteti bo'yicha talaba topilmadi")];
    }

    let header = format!(
        "🏛️ Fakultet qidiruvi: '{query}'\n📊 Topilgan talabalar: {} ta\n",
        records.len()
    );
    let entries = records.iter().map(|s| {
        format!(
            "👤 {}\n📋 {}\n📚 {}\n🔗 {}\n{SEPARATOR}",
            s.full_name, s.identifier, s.group_name, s.group_link
        )
    });
    pack(std::iter::once(header).chain(entries))
}

#[must_use]
pub fn group_results(query: &str, records: &[&StudentRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![format!("❌ '{query}' guruhi bo'yicha talaba topilmadi")];
    }

    let header = format!(
        "📚 Guruh qidiruvi: '{query}'\n📊 Topilgan talabalar: {} ta\n",
        records.len()
    );
    let entries = records.iter().map(|s| {
        format!(
            "👤 {}\n📋 {}\n🏛️ {}\n🔗 {}\n{SEPARATOR}",
            s.full_name, s.identifier, s.faculty, s.group_link
        )
    });
    pack(std::iter::once(header).chain(entries))
}

#[must_use]
pub fn all_students(listing: &Listing<'_>) -> Vec<String> {
    let header = format!(
        "📊 Barcha talabalar ro'yxati:\n👥 Jami: {} ta talaba\n",
        listing.total
    );
    let entries = listing.records.iter().enumerate().map(|(i, s)| {
        format!(
            "{}. {}\n   📋 {}\n   🏛️ {}\n   📚 {}\n   ──────────────────",
            i + 1,
            s.full_name,
            s.identifier,
            s.faculty,
            s.group_name
        )
    });
    let footer = (listing.remaining() > 0)
        .then(|| format!("\n... va yana {} ta talaba", listing.remaining()));
    pack(std::iter::once(header).chain(entries).chain(footer))
}

#[must_use]
pub fn group_links(groups: &[GroupEntry<'_>]) -> Vec<String> {
    let header = "🔗 Barcha guruh linklari:\n".to_string();
    let entries = groups.iter().map(|g| {
        format!(
            "📚 {}\n🏛️ {}\n🔗 {}\n{SEPARATOR}",
            g.group_name, g.faculty, g.group_link
        )
    });
    pack(std::iter::once(header).chain(entries))
}

#[must_use]
pub fn stats(stats: &Stats) -> String {
    format!(
        "📊 Bot statistikasi:\n\n\
         👥 Jami talabalar: {}\n\
         🏛️ Fakultetlar soni: {}\n\
         📚 Guruhlar soni: {}\n\
         📁 Ma'lumotlar manbai: Excel fayl",
        stats.total_students, stats.distinct_faculties, stats.distinct_groups
    )
}

/// Join blocks with newlines into as few messages as fit `MAX_MESSAGE_LENGTH`.
///
/// A block longer than the limit on its own is split at character boundaries.
#[must_use]
pub fn pack(blocks: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();

    for block in blocks {
        for piece in split_oversized(&block) {
            let needed = if current.is_empty() {
                piece.len()
            } else {
                current.len() + 1 + piece.len()
            };
            if needed > MAX_MESSAGE_LENGTH && !current.is_empty() {
                messages.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(piece);
        }
    }

    if !current.is_empty() {
        messages.push(current);
    }
    messages
}

fn split_oversized(block: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = block;
    while rest.len() > MAX_MESSAGE_LENGTH {
        let mut cut = MAX_MESSAGE_LENGTH;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let (head, tail) = rest.split_at(cut);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);
    pieces
}
