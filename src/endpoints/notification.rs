//! Notification state and counters.
endpoints! {
	/// Endpoints of the `/notification` resource.
	NOTIFICATION_ENDPOINTS;

	/// Sets the state of a single notification.
	Authenticated Post "/notification/mark_one" => notification_mark_one / NOTIFICATION_MARK_ONE ["id", "state"] "NotificationMarkOne";

	Authenticated Post "/notification/mark_all" => notification_mark_all / NOTIFICATION_MARK_ALL [] "NotificationMarkAll";
	Authenticated Post "/notification/mark_all_dialogue" => notification_mark_all_dialogue / NOTIFICATION_MARK_ALL_DIALOGUE [] "NotificationMarkAllDialogue";
	Authenticated Post "/notification/mark_all_whisper" => notification_mark_all_whisper / NOTIFICATION_MARK_ALL_WHISPER [] "NotificationMarkAllWhisper";
	Authenticated Post "/notification/mark_all_notification" => notification_mark_all_notification / NOTIFICATION_MARK_ALL_NOTIFICATION [] "NotificationMarkAllNotification";
	Authenticated Post "/notification/reset_dialogue_count" => notification_reset_dialogue_count / NOTIFICATION_RESET_DIALOGUE_COUNT [] "NotificationResetDialogueCount";
	Authenticated Post "/notification/reset_whisper_notif_count" => notification_reset_whisper_notif_count / NOTIFICATION_RESET_WHISPER_NOTIF_COUNT [] "NotificationResetWhisperNotifCount";
	Authenticated Post "/notification/reset_notification_count" => notification_reset_notification_count / NOTIFICATION_RESET_NOTIFICATION_COUNT [] "NotificationResetNotificationCount";
}
