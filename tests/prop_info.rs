use proptest::prelude::*;
use ssq::codec::{
    decode_info, decode_players, decode_rules, EDF_GAME_ID, EDF_KEYWORDS, EDF_PORT, EDF_SOURCE_TV, EDF_STEAM_ID,
};
use ssq::ProtocolError;

#[derive(Clone, Debug)]
struct Extras {
    port: u16,
    steam_id: u64,
    tv_port: u16,
    tv_name: String,
    keywords: String,
    game_id: u64,
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.:-]{0,24}"
}

fn extras_strategy() -> impl Strategy<Value = Extras> {
    (any::<u16>(), any::<u64>(), any::<u16>(), text(), text(), any::<u64>()).prop_map(
        |(port, steam_id, tv_port, tv_name, keywords, game_id)| Extras {
            port,
            steam_id,
            tv_port,
            tv_name,
            keywords,
            game_id,
        },
    )
}

fn cstring(buf: &mut Vec<u8>, s: &str) {
    buf.extend(s.as_bytes());
    buf.push(0);
}

/// Builds an info response and returns it with the length of its fixed part.
fn info_response(name: &str, edf: u8, extras: &Extras) -> (Vec<u8>, usize) {
    let mut buf = vec![0xFF, 0xFF, 0xFF, 0xFF, b'I', 17];
    cstring(&mut buf, name);
    cstring(&mut buf, "cp_badlands");
    cstring(&mut buf, "tf");
    cstring(&mut buf, "Team Fortress");
    buf.extend(440u16.to_le_bytes());
    buf.extend([3, 24, 0, b'd', b'w', 0, 1]);
    cstring(&mut buf, "8622567");
    buf.push(edf);
    let fixed_len = buf.len();

    if edf & EDF_PORT != 0 {
        buf.extend(extras.port.to_le_bytes());
    }
    if edf & EDF_STEAM_ID != 0 {
        buf.extend(extras.steam_id.to_le_bytes());
    }
    if edf & EDF_SOURCE_TV != 0 {
        buf.extend(extras.tv_port.to_le_bytes());
        cstring(&mut buf, &extras.tv_name);
    }
    if edf & EDF_KEYWORDS != 0 {
        cstring(&mut buf, &extras.keywords);
    }
    if edf & EDF_GAME_ID != 0 {
        buf.extend(extras.game_id.to_le_bytes());
    }

    (buf, fixed_len)
}

fn optional_len(edf: u8, extras: &Extras) -> usize {
    let mut len = 0;
    if edf & EDF_PORT != 0 {
        len += 2;
    }
    if edf & EDF_STEAM_ID != 0 {
        len += 8;
    }
    if edf & EDF_SOURCE_TV != 0 {
        len += 2 + extras.tv_name.len() + 1;
    }
    if edf & EDF_KEYWORDS != 0 {
        len += extras.keywords.len() + 1;
    }
    if edf & EDF_GAME_ID != 0 {
        len += 8;
    }
    len
}

proptest! {
    #[test]
    fn prop_edf_selects_fields(name in text(), edf in any::<u8>(), extras in extras_strategy()) {
        let (buf, fixed_len) = info_response(&name, edf, &extras);
        prop_assert_eq!(buf.len(), fixed_len + optional_len(edf, &extras));

        let info = decode_info(&buf).unwrap();
        prop_assert_eq!(&info.name, &name);
        prop_assert_eq!(info.edf, edf);
        prop_assert_eq!(info.extra.port, (edf & EDF_PORT != 0).then_some(extras.port));
        prop_assert_eq!(info.extra.steam_id, (edf & EDF_STEAM_ID != 0).then_some(extras.steam_id));
        prop_assert_eq!(
            info.extra.source_tv.as_ref().map(|tv| (tv.port, tv.name.clone())),
            (edf & EDF_SOURCE_TV != 0).then(|| (extras.tv_port, extras.tv_name.clone()))
        );
        prop_assert_eq!(
            info.extra.keywords.clone(),
            (edf & EDF_KEYWORDS != 0).then(|| extras.keywords.clone())
        );
        prop_assert_eq!(info.extra.game_id, (edf & EDF_GAME_ID != 0).then_some(extras.game_id));
    }

    #[test]
    fn prop_info_missing_last_byte_fails(name in text(), edf in any::<u8>(), extras in extras_strategy()) {
        let (buf, _) = info_response(&name, edf, &extras);
        let result = decode_info(&buf[..buf.len() - 1]);
        prop_assert!(matches!(result, Err(ProtocolError::Truncated { .. })), "got {:?}", result);
    }

    #[test]
    fn prop_player_count_byte_is_ignored(
        count in any::<u8>(),
        records in prop::collection::vec((text(), any::<i32>(), 0f32..100_000f32), 0..16),
    ) {
        let mut buf = vec![0xFF, 0xFF, 0xFF, 0xFF, b'D', count];
        for (i, (name, score, duration)) in records.iter().enumerate() {
            buf.push(i as u8);
            cstring(&mut buf, name);
            buf.extend(score.to_le_bytes());
            buf.extend(duration.to_le_bytes());
        }

        let players = decode_players(&buf).unwrap();
        prop_assert_eq!(players.len(), records.len());
        for (player, (name, score, duration)) in players.iter().zip(&records) {
            prop_assert_eq!(&player.name, name);
            prop_assert_eq!(player.score, *score);
            prop_assert_eq!(player.duration, *duration);
        }
    }

    #[test]
    fn prop_rule_count_must_match(
        rules in prop::collection::vec((text(), text()), 0..16),
        advertised in 0u16..32,
    ) {
        let mut buf = vec![0xFF, 0xFF, 0xFF, 0xFF, b'E'];
        buf.extend(advertised.to_le_bytes());
        for (name, value) in &rules {
            cstring(&mut buf, name);
            cstring(&mut buf, value);
        }

        let result = decode_rules(&buf);
        if usize::from(advertised) == rules.len() {
            prop_assert_eq!(result.unwrap().len(), rules.len());
        } else {
            prop_assert_eq!(
                result,
                Err(ProtocolError::CountMismatch {
                    expected: usize::from(advertised),
                    actual: rules.len(),
                })
            );
        }
    }
}
